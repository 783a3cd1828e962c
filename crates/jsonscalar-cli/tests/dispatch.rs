use std::io::Write as _;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn parse_value_reads_from_stdin() {
    Command::cargo_bin("jsonscalar-cli")
        .unwrap()
        .arg("parse-value")
        .write_stdin("42")
        .assert()
        .success()
        .stdout(predicate::str::contains("integer: 42"));
}

#[test]
fn parse_value_reads_from_file() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(b"\"hello\"").unwrap();
    tmp.flush().unwrap();

    Command::cargo_bin("jsonscalar-cli")
        .unwrap()
        .arg("parse-value")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("string: hello"));
}

#[test]
fn lines_prints_numbered_rows() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(b"one\ntwo\n").unwrap();
    tmp.flush().unwrap();

    Command::cargo_bin("jsonscalar-cli")
        .unwrap()
        .arg("lines")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1: one"))
        .stdout(predicate::str::contains("2: two"));
}

#[test]
fn tree_check_reports_valid() {
    Command::cargo_bin("jsonscalar-cli")
        .unwrap()
        .arg("tree-check")
        .arg("5,3,8,1")
        .arg("3")
        .assert()
        .success()
        .stdout(predicate::str::contains("size: 3"))
        .stdout(predicate::str::contains("valid: true"));
}

#[test]
fn unknown_command_exits_with_usage_code() {
    Command::cargo_bin("jsonscalar-cli")
        .unwrap()
        .arg("not-a-real-command")
        .assert()
        .code(12);
}

#[test]
fn missing_required_argument_exits_with_usage_code() {
    Command::cargo_bin("jsonscalar-cli")
        .unwrap()
        .arg("lines")
        .assert()
        .code(12);
}

#[test]
fn no_arguments_prints_usage() {
    Command::cargo_bin("jsonscalar-cli")
        .unwrap()
        .assert()
        .code(12)
        .stdout(predicate::str::contains("usage"));
}

#[test]
fn test_prefix_runs_matching_smoke_tests() {
    Command::cargo_bin("jsonscalar-cli")
        .unwrap()
        .arg("test")
        .assert()
        .success()
        .stdout(predicate::str::contains("test_parse_value: OK"))
        .stdout(predicate::str::contains("test_tree: OK"));
}
