//! CLI integration tests using the real tapfresh binary

mod common;

use predicates::prelude::*;

use common::tapfresh_cmd;

#[test]
fn test_help_output() {
    tapfresh_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Homebrew"))
        .stdout(predicate::str::contains("--days"))
        .stdout(predicate::str::contains("--only-formula"))
        .stdout(predicate::str::contains("--hide-looked-up"));
}

#[test]
fn test_version_output() {
    tapfresh_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tapfresh"));
}

#[test]
fn test_unknown_flag_exits_one() {
    tapfresh_cmd()
        .arg("--frobnicate")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--frobnicate"));
}

#[test]
fn test_invalid_days_value_exits_one() {
    tapfresh_cmd()
        .args(["--days", "soon"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_days_without_value_exits_one() {
    tapfresh_cmd().arg("--days").assert().failure().code(1);
}

#[test]
fn test_zero_truncation_exits_one() {
    tapfresh_cmd()
        .args(["--truncate-chars", "0"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_completions_bash() {
    tapfresh_cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tapfresh"));
}

#[test]
fn test_completions_zsh() {
    tapfresh_cmd()
        .args(["--completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tapfresh"));
}

#[test]
fn test_completions_unknown_shell_exits_one() {
    tapfresh_cmd()
        .args(["--completions", "tcsh"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown shell"));
}

#[test]
fn test_missing_brew_exits_one() {
    let empty = tempfile::TempDir::new().unwrap();
    tapfresh_cmd()
        .env("PATH", empty.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Homebrew not found"));
}
