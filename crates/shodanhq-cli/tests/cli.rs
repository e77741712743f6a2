//! End-to-end tests for the `shodanhq` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn shodanhq(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shodanhq").unwrap();
    cmd.env_remove("SHODAN_API_KEY")
        .env_remove("RUST_LOG")
        .env("SHODANHQ_CONFIG", config_dir.path().join("config.toml"))
        .arg("--no-color");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    shodanhq(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("host"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_host_without_api_key() {
    let dir = TempDir::new().unwrap();
    shodanhq(&dir)
        .args(["host", "192.0.2.1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key required"));
}

#[test]
fn test_host_rejects_bad_ip_before_any_request() {
    let dir = TempDir::new().unwrap();
    shodanhq(&dir)
        .args(["host", "not-an-ip", "-k", "key", "--base-url", "http://127.0.0.1:9/api/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid IP address: not-an-ip"));
}

#[test]
fn test_config_roundtrip() {
    let dir = TempDir::new().unwrap();

    shodanhq(&dir)
        .args(["config", "set", "api_key", "ABCDEFGHIJKLMNOP"])
        .assert()
        .success();

    shodanhq(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ABCD...MNOP"))
        .stdout(predicate::str::contains("ABCDEFGHIJKLMNOP").not());

    shodanhq(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_unknown_key() {
    let dir = TempDir::new().unwrap();
    shodanhq(&dir)
        .args(["config", "set", "colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[tokio::test]
async fn test_search_csv_against_mock_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("q", "ftp"))
        .and(query_param("o", "0"))
        .and(query_param("l", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"total": 40, "matches": [
                {"ip": "198.51.100.4", "hostnames": ["ftp.example.net"], "port": 21,
                 "updated": "12.12.2012", "data": "220 ProFTPD Server", "country_code": "NL"}
            ]}"#,
        ))
        .mount(&server)
        .await;

    let base_url = format!("{}/api/", server.uri());
    let output = tokio::task::spawn_blocking(move || {
        let dir = TempDir::new().unwrap();
        shodanhq(&dir)
            .args(["search", "ftp", "--limit", "5", "-o", "csv", "-k", "key"])
            .args(["--base-url", &base_url])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(
        "198.51.100.4,ftp.example.net,21,12.12.2012,NL,,220 ProFTPD Server"
    ));
}

#[tokio::test]
async fn test_remote_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/host"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"error": "invalid API key"}"#),
        )
        .mount(&server)
        .await;

    let base_url = format!("{}/api/", server.uri());
    let output = tokio::task::spawn_blocking(move || {
        let dir = TempDir::new().unwrap();
        shodanhq(&dir)
            .args(["host", "192.0.2.1", "-k", "bad", "--base-url", &base_url])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("remote error: invalid API key"));
}
