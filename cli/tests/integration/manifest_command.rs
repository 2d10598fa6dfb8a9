//! Integration tests for `nodeboot manifest`.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn nodeboot() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("nodeboot"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_manifest_renders_pairs_in_argument_order() {
    nodeboot()
        .args(["manifest", "zone=eu-west-1a", "role=agent", "arch=arm64"])
        .assert()
        .success()
        .stdout("zone: \"eu-west-1a\"\nrole: \"agent\"\narch: \"arm64\"\n");
}

#[test]
fn test_manifest_splits_on_first_equals() {
    nodeboot()
        .args(["manifest", "labels=a=b"])
        .assert()
        .success()
        .stdout("labels: \"a=b\"\n");
}

#[test]
fn test_manifest_allows_empty_value() {
    nodeboot()
        .args(["manifest", "token="])
        .assert()
        .success()
        .stdout("token: \"\"\n");
}

#[test]
fn test_manifest_without_equals_is_usage_error() {
    nodeboot()
        .args(["manifest", "role"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected KEY=VALUE"));
}

#[test]
fn test_manifest_requires_an_entry() {
    nodeboot().arg("manifest").assert().code(2);
}

#[test]
fn test_manifest_json_wraps_text() {
    let output = nodeboot()
        .args(["manifest", "role=server", "--json"])
        .output()
        .expect("run nodeboot");
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["manifest"], "role: \"server\"\n");
}
