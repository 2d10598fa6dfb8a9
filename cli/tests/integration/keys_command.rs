//! Integration tests for `nodeboot keys`.
//!
//! Each test serves one canned HTTP response from a local listener, so no
//! external network is touched.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use assert_cmd::Command;
use predicates::prelude::*;

const ED25519_OPS: &str =
    "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIGZXD/BaIHQEMITUrKlCk+8GdTDd6U/06SuNhFklPrd5 ops@node-a";
const ED25519_BARE: &str =
    "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIJPvN8YVcTgiKyGkK+Uhg9CNdc1P7UnBy7pXGwamnjmk";

fn nodeboot() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("nodeboot"));
    cmd.env("NO_COLOR", "1");
    // Absent file: the default fetch timeout applies.
    cmd.env("NODEBOOT_CONFIG", "/nonexistent/nodeboot/config.yaml");
    cmd
}

/// Accept one connection, answer with `status` and `body`, and return the URL.
fn serve_once(status: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{addr}/keys")
}

#[test]
fn test_keys_lists_fetched_keys() {
    let url = serve_once("200 OK", &format!("{ED25519_OPS}\n{ED25519_BARE}\n"));
    nodeboot()
        .args(["keys", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 key(s)"))
        .stdout(predicate::str::contains("ssh-ed25519"))
        .stdout(predicate::str::contains("SHA256:"))
        .stdout(predicate::str::contains("ops@node-a"));
}

#[test]
fn test_keys_raw_prints_authorized_keys_lines() {
    let url = serve_once("200 OK", &format!("# header\n{ED25519_OPS}\ngarbage\n{ED25519_BARE}\n"));
    nodeboot()
        .args(["keys", "--raw", &url])
        .assert()
        .success()
        .stdout(format!("{ED25519_OPS}\n{ED25519_BARE}\n"));
}

#[test]
fn test_keys_json() {
    let url = serve_once("200 OK", ED25519_OPS);
    let output = nodeboot()
        .args(["keys", &url, "--json"])
        .output()
        .expect("run nodeboot");
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["source"], url.as_str());
    assert_eq!(json["count"], 1);
    assert_eq!(json["keys"][0]["algorithm"], "ssh-ed25519");
    assert_eq!(json["keys"][0]["comment"], "ops@node-a");
    assert_eq!(json["keys"][0]["openssh"], ED25519_OPS);
}

#[test]
fn test_keys_no_valid_key_fails() {
    let url = serve_once("200 OK", "abc");
    nodeboot()
        .args(["keys", &url])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ssh: no key found"));
}

#[test]
fn test_keys_no_valid_key_json_code() {
    let url = serve_once("200 OK", "");
    let output = nodeboot()
        .args(["--json", "keys", &url])
        .output()
        .expect("run nodeboot");
    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["error"], true);
    assert_eq!(json["message"], "ssh: no key found");
    assert_eq!(json["code"], "NO_KEY_FOUND");
}

#[test]
fn test_keys_http_error_reports_status_and_body() {
    let url = serve_once("404 Not Found", "no keys here");
    nodeboot()
        .args(["keys", &url])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("got 404 status code from"))
        .stderr(predicate::str::contains("no keys here"));
}

#[test]
fn test_keys_http_error_json_code() {
    let url = serve_once("500 Internal Server Error", "boom");
    let output = nodeboot()
        .args(["--json", "keys", &url])
        .output()
        .expect("run nodeboot");
    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["code"], "HTTP_STATUS");
}

#[test]
fn test_keys_connection_refused_is_transport_error() {
    let addr = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let output = nodeboot()
        .args(["--json", "keys", &format!("http://{addr}/keys"), "--timeout", "2"])
        .output()
        .expect("run nodeboot");
    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["code"], "TRANSPORT_ERROR");
}

#[test]
fn test_keys_invalid_url_fails_without_request() {
    nodeboot()
        .args(["--json", "keys", "not a url"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("INVALID_URL"));
}

#[test]
fn test_keys_timeout_out_of_range_is_usage_error() {
    nodeboot()
        .args(["keys", "http://127.0.0.1/keys", "--timeout", "0"])
        .assert()
        .code(2);
}
