//! Integration tests for the config command

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use plowins::Config;

use crate::helpers::plowins;

#[test]
fn config_show_prints_defaults_without_a_file() {
    let temp = TempDir::new().unwrap();

    plowins(temp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[scan]"))
        .stdout(predicate::str::contains("parallel = false"))
        .stdout(predicate::str::contains("[output]"));
}

#[test]
fn config_init_writes_defaults_once() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");

    plowins(temp.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let written = Config::from_toml(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written, Config::default());

    plowins(temp.path())
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--force"));

    plowins(temp.path())
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_show_reflects_file_contents() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.toml"),
        "[scan]\nextensions = [\"hh\"]\nparallel = true\n",
    )
    .unwrap();

    plowins(temp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("parallel = true"))
        .stdout(predicate::str::contains("\"hh\""));
}
