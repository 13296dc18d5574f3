//! End-to-end tests for the `generate` command.
//!
//! These tests invoke the actual CLI binary and validate the behavior of the
//! `generate` subcommand from a user's perspective.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_generate_truncates_at_scope() {
    let mut cmd = cargo_bin_cmd!("prn");

    cmd.arg("generate")
        .args(["--portfolio", "acme"])
        .args(["--app", "web"])
        .args(["--branch", "main"])
        .args(["--build", "42"])
        .args(["--scope", "branch"])
        .assert()
        .success()
        .stdout(predicate::eq("acme:web:main\n"));
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_generate_hyphen_form() {
    let mut cmd = cargo_bin_cmd!("prn");

    cmd.arg("generate")
        .args(["--portfolio", "acme"])
        .args(["--app", "web"])
        .args(["--branch", "main"])
        .args(["--build", "42"])
        .args(["--scope", "build"])
        .arg("--hyphen")
        .assert()
        .success()
        .stdout(predicate::eq("acme-web-main-42\n"));
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_generate_gap_truncates_by_default() {
    let mut cmd = cargo_bin_cmd!("prn");

    cmd.arg("generate")
        .args(["--portfolio", "acme"])
        .args(["--branch", "main"])
        .args(["--build", "42"])
        .assert()
        .success()
        .stdout(predicate::eq("acme\n"));
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_generate_gap_rejected_in_strict_mode() {
    let mut cmd = cargo_bin_cmd!("prn");

    cmd.arg("generate")
        .args(["--portfolio", "acme"])
        .args(["--branch", "main"])
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Gapped identifier"));
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_generate_canonical_form() {
    let mut cmd = cargo_bin_cmd!("prn");

    cmd.arg("generate")
        .args(["--portfolio", "acme"])
        .args(["--app", "web"])
        .arg("--canonical")
        .assert()
        .success()
        .stdout(predicate::eq("prn:acme:web\n"));
}
