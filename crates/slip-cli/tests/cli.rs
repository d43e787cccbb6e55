//! End-to-end tests for the slip binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn parse_text_emits_json() {
    let mut cmd = Command::cargo_bin("slip").unwrap();
    cmd.args(["parse", "--text", "Total 1,234.56 บาท"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1234.56"));
}

#[test]
fn parse_file_in_text_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slip.txt");
    std::fs::write(&path, "07/08/2568 14:30\nTotal 1,234.56 บาท\n").unwrap();

    let mut cmd = Command::cargo_bin("slip").unwrap();
    cmd.args(["parse", "--format", "text"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-08-07 14:30:00"));
}

#[test]
fn parse_without_input_fails() {
    let mut cmd = Command::cargo_bin("slip").unwrap();
    cmd.arg("parse").assert().failure();
}

#[test]
fn parse_reports_missing_file() {
    let mut cmd = Command::cargo_bin("slip").unwrap();
    cmd.args(["parse", "no-such-slip.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn batch_writes_summary_csv() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "Total 500.00 บาท").unwrap();
    std::fs::write(dir.path().join("b.txt"), "ref AB12345678").unwrap();
    let summary = dir.path().join("summary.csv");

    let mut cmd = Command::cargo_bin("slip").unwrap();
    cmd.arg("batch")
        .arg(dir.path().join("*.txt"))
        .arg("--summary")
        .arg(&summary)
        .assert()
        .success();

    let summary_text = std::fs::read_to_string(&summary).unwrap();
    assert!(summary_text.contains("500.00"));
    assert!(summary_text.contains("ab12345678"));
}

#[test]
fn config_show_prints_defaults() {
    let mut cmd = Command::cargo_bin("slip").unwrap();
    cmd.args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reject_date_like_references"));
}
