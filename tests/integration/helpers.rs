//! Shared helpers for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Directory holding the checked-in fixture transcripts.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Copy a fixture file or directory into a fresh temp dir.
///
/// Returns the temp dir (keep it alive) and the path of the copy.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let target = temp.path().join(name);
    copy_recursive(&fixtures_dir().join(name), &target);
    (temp, target)
}

fn copy_recursive(from: &Path, to: &Path) {
    if from.is_dir() {
        fs::create_dir_all(to).expect("Failed to create fixture dir");
        for entry in fs::read_dir(from).expect("Failed to read fixture dir") {
            let entry = entry.expect("Failed to read fixture entry");
            copy_recursive(&entry.path(), &to.join(entry.file_name()));
        }
    } else {
        fs::copy(from, to).expect("Failed to copy fixture");
    }
}

/// The plowins binary with an isolated (non-existent) config file and no
/// log filter from the environment.
pub fn plowins(config_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_plowins"));
    cmd.env("PLOWINS_CONFIG", config_dir.join("config.toml"))
        .env_remove("PLOWINS_LOG");
    cmd
}

/// Expected table for the `hands` fixture directory.
pub const HANDS_TABLE: &str = "\
hand,first_win_day,first_win_situation,wins
AAKKd,2024-01-05,flop,\"[\"\"KdAdKcAc\"\",\"\"AhAsKhKs\"\"]\"
T982s,2024-01-05,river,\"[\"\"Ts9s8d2c\"\"]\"
AKQJm,2024-01-10,preflop,\"[\"\"AhKhQhJh\"\"]\"
";
