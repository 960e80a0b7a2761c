//! Integration tests for CLI argument handling.

use assert_cmd::cargo::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn voxseg() -> Command {
    Command::new(cargo_bin("voxseg"))
}

#[test]
fn test_no_arguments_prints_usage() {
    voxseg()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_one_argument_prints_usage() {
    voxseg()
        .arg("in.wav")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_three_arguments_prints_usage_and_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.txt");

    voxseg()
        .arg("in.wav")
        .arg(&output)
        .arg("extra.txt")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));

    assert!(!output.exists());
}

#[test]
fn test_one_argument_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.txt");

    // The single argument is taken as the input; no output path exists to
    // write, and nothing may be created.
    voxseg().arg(&output).assert().failure().code(1);

    assert!(!output.exists());
}

#[test]
fn test_help_flag() {
    voxseg()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("speech"));
}

#[test]
fn test_version_flag() {
    voxseg()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("voxseg"));
}
