//! Integration tests for the funge CLI.
//!
//! These tests invoke the `funge` binary as a subprocess and check
//! exit codes, stdout, and stderr.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[allow(deprecated)]
fn funge() -> Command {
    Command::cargo_bin("funge").unwrap()
}

/// Write `source` to a temp program file and return its path.
fn program(dir: &TempDir, source: &str) -> PathBuf {
    let path = dir.path().join("program.b98");
    fs::write(&path, source).unwrap();
    path
}

// ---- No-args / help ----

#[test]
fn no_args_prints_usage_and_exits_1() {
    funge()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage: funge"));
}

#[test]
fn help_flag_exits_0() {
    funge()
        .arg("--help")
        .assert()
        .success()
        .stderr(predicate::str::contains("Commands:"));
}

#[test]
fn unknown_command_exits_1() {
    funge()
        .arg("frobnicate")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown command"));
}

// ---- Run ----

#[test]
fn run_emits_program_output_on_stdout() {
    let dir = TempDir::new().unwrap();
    let path = program(&dir, "\"ih\",,@\n");

    funge()
        .args(["run", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("hi")
        .stderr(predicate::str::contains("halted after 7 tick(s)"));
}

#[test]
fn run_prints_integers_with_trailing_space() {
    let dir = TempDir::new().unwrap();
    let path = program(&dir, "25*.@\n");

    funge()
        .args(["run", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("10 ");
}

#[test]
fn run_missing_file_exits_1() {
    funge()
        .args(["run", "no-such-program.b98"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn run_empty_program_exits_1() {
    let dir = TempDir::new().unwrap();
    let path = program(&dir, "\n\n");

    funge()
        .args(["run", path.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no cells"));
}

#[test]
fn run_with_exhausted_limit_exits_3() {
    let dir = TempDir::new().unwrap();
    let path = program(&dir, ">v\n^<\n");

    funge()
        .args(["run", path.to_str().unwrap(), "--limit", "50"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("tick budget"));
}

#[test]
fn run_with_generous_limit_succeeds() {
    let dir = TempDir::new().unwrap();
    let path = program(&dir, "@\n");

    funge()
        .args(["run", path.to_str().unwrap(), "--limit", "50"])
        .assert()
        .success()
        .stderr(predicate::str::contains("halted after 1 tick(s)"));
}

#[test]
fn run_with_bad_limit_exits_1() {
    let dir = TempDir::new().unwrap();
    let path = program(&dir, "@\n");

    funge()
        .args(["run", path.to_str().unwrap(), "--limit", "soon"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--limit expects a number"));
}

// ---- Show ----

#[test]
fn show_prints_bounds_and_grid() {
    let dir = TempDir::new().unwrap();
    let path = program(&dir, "12+,@\n");

    funge()
        .args(["show", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("bounds: (0, 0) to (4, 0)"))
        .stdout(predicate::str::contains("12+,@"));
}

#[test]
fn show_missing_file_exits_1() {
    funge()
        .args(["show", "no-such-program.b98"])
        .assert()
        .failure()
        .code(1);
}
