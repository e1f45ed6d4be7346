//! Integration tests for the shapes command

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::plowins;

#[test]
fn shapes_prints_total_and_per_pattern_counts() {
    let temp = TempDir::new().unwrap();

    plowins(temp.path())
        .arg("shapes")
        .assert()
        .success()
        .stdout("7566\n  m: 715\n  t: 1573\n  d: 1651\n  s: 1807\n  r: 1820\n");
}

#[test]
fn completions_mention_subcommands() {
    let temp = TempDir::new().unwrap();

    plowins(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("plowins"))
        .stdout(predicate::str::contains("shapes"));
}
