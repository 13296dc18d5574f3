//! End-to-end tests for the `parse` command.
//!
//! These tests invoke the actual CLI binary and validate the behavior of the
//! `parse` subcommand from a user's perspective.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_parse_full_prn_text_output() {
    let mut cmd = cargo_bin_cmd!("prn");

    cmd.arg("parse")
        .arg("prn:acme:web:main:42:api")
        .assert()
        .success()
        .stdout(predicate::str::contains("portfolio: acme"))
        .stdout(predicate::str::contains("component: api"))
        .stdout(predicate::str::contains("scope: component"));
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_parse_json_output() {
    let mut cmd = cargo_bin_cmd!("prn");

    let output = cmd
        .arg("parse")
        .arg("prn:acme:web")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["portfolio"], "acme");
    assert_eq!(report["app"], "web");
    assert_eq!(report["branch"], serde_json::Value::Null);
    assert_eq!(report["scope"], "app");
    assert_eq!(report["canonical"], "prn:acme:web");
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_parse_malformed_input_still_succeeds() {
    // Parsing is total; degraded input reports empty fields, not an error.
    let mut cmd = cargo_bin_cmd!("prn");

    cmd.arg("parse")
        .arg("garbage")
        .assert()
        .success()
        .stdout(predicate::str::contains("scope: none"));
}
