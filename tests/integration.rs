// Integration tests for the hiring-board CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and argument parsing.
//
// Prerequisites: tempfile, assert_cmd, predicates (dev-dependencies).

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the hiring-board binary.
fn board() -> Command {
    Command::cargo_bin("hiring-board").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    board()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hiring-board"));
}

#[test]
fn cli_help_flag() {
    board()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Candidate scoring"));
}

#[test]
fn list_requires_input() {
    board()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn list_rejects_unknown_sort_key() {
    board()
        .arg("list")
        .arg("candidates.json")
        .arg("--sort")
        .arg("salary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    board()
        .arg("team")
        .arg("candidates.json")
        .arg("-q")
        .arg("-v")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn missing_input_exits_with_runtime_failure() {
    board()
        .arg("list")
        .arg("does/not/exist.json")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("input path does not exist"));
}
