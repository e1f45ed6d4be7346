//! Integration tests for the scan command

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixtures_dir, plowins, temp_fixture, HANDS_TABLE};

// ============================================================================
// Table Output Tests
// ============================================================================

#[test]
fn scan_directory_writes_first_win_table() {
    let (temp, input) = temp_fixture("hands");
    let output = temp.path().join("out").join("hands.csv");

    plowins(temp.path())
        .arg("scan")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Scanned 2 file(s), 6 hand(s), 4 win(s)"))
        .stdout(predicate::str::contains("Wrote 3 rows to"));

    let csv = fs::read_to_string(&output).unwrap();
    assert_eq!(csv, HANDS_TABLE);
}

#[test]
fn snapshot_scan_table() {
    let (temp, input) = temp_fixture("hands");
    let output = temp.path().join("hands.csv");

    plowins(temp.path())
        .args(["scan", "--parallel", "-o"])
        .arg(&output)
        .arg(&input)
        .assert()
        .success();

    let csv = fs::read_to_string(&output).unwrap();
    insta::assert_snapshot!("scan_hands_table", csv);
}

#[test]
fn scan_to_stdout_prints_only_the_table() {
    let temp = TempDir::new().unwrap();

    plowins(temp.path())
        .arg("scan")
        .arg(fixtures_dir().join("hands"))
        .args(["-o", "-"])
        .assert()
        .success()
        .stdout(HANDS_TABLE)
        .stderr(predicate::str::contains("Scanned 2 file(s)"));
}

#[test]
fn parallel_scan_matches_sequential() {
    let temp = TempDir::new().unwrap();
    let input = fixtures_dir().join("hands");

    let sequential = plowins(temp.path())
        .arg("scan")
        .arg(&input)
        .args(["-o", "-"])
        .output()
        .unwrap();
    let parallel = plowins(temp.path())
        .arg("scan")
        .arg(&input)
        .args(["-o", "-", "--parallel"])
        .output()
        .unwrap();

    assert!(sequential.status.success());
    assert_eq!(sequential.stdout, parallel.stdout);
}

#[test]
fn default_output_uses_configured_dir_and_input_name() {
    let (temp, input) = temp_fixture("hands");
    let tables = temp.path().join("tables");
    fs::write(
        temp.path().join("config.toml"),
        format!("[output]\ndir = {:?}\n", tables.to_str().unwrap()),
    )
    .unwrap();

    plowins(temp.path())
        .arg("scan")
        .arg(&input)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(tables.join("hands.csv")).unwrap(), HANDS_TABLE);
}

// ============================================================================
// Single File and Encoding Tests
// ============================================================================

#[test]
fn scan_single_file_with_one_win_gives_one_row() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("one.txt");
    fs::write(
        &input,
        "Poker Hand #RC7: PLO ($0.10/$0.25) - 2024/05/01 09:30:00\n\
         *** HOLE CARDS ***\n\
         Dealt to Hero [Ah Kd Qh Js]\n\
         Villain: folds\n\
         Hero collected $0.35 from pot\n",
    )
    .unwrap();

    plowins(temp.path())
        .arg("scan")
        .arg(&input)
        .args(["-o", "-"])
        .assert()
        .success()
        .stdout(
            "hand,first_win_day,first_win_situation,wins\n\
             AKQJs,2024-05-01,preflop,\"[\"\"AhKdQhJs\"\"]\"\n",
        );
}

#[test]
fn undecodable_bytes_do_not_abort_the_run() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("mixed.txt");
    let mut bytes = b"\xfe\xff garbage\n".to_vec();
    bytes.extend_from_slice(
        b"Poker Hand #RC8: PLO - 2024/05/02 09:30:00\nDealt to Hero [2c 3c 4c 5c]\n\xc3(\nHero won ($1.00)\n",
    );
    fs::write(&input, bytes).unwrap();

    plowins(temp.path())
        .arg("scan")
        .arg(&input)
        .args(["-o", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5432m,2024-05-02,preflop"));
}

#[test]
fn directory_without_transcripts_writes_header_only() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("empty");
    fs::create_dir(&input).unwrap();

    plowins(temp.path())
        .arg("scan")
        .arg(&input)
        .args(["-o", "-"])
        .assert()
        .success()
        .stdout("hand,first_win_day,first_win_situation,wins\n");
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn scan_missing_input_exits_1_with_path() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("no-such-dir");

    plowins(temp.path())
        .arg("scan")
        .arg(&missing)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Input not found"))
        .stderr(predicate::str::contains("no-such-dir"));
}

#[test]
fn scan_without_input_is_a_usage_error() {
    let temp = TempDir::new().unwrap();

    plowins(temp.path())
        .arg("scan")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<INPUT>"));
}

#[test]
fn malformed_config_fails_the_scan() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "[scan]\nparallel = 3\n").unwrap();

    plowins(temp.path())
        .arg("scan")
        .arg(fixtures_dir().join("hands"))
        .args(["-o", "-"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config"));
}
