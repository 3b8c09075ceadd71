//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Binary with config lookups pointed at an empty temp directory
fn analyzer_bin(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("transcript-analyzer").expect("binary should build");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("OPENAI_API_KEY")
        .env_remove("OPENAI_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_output() {
    let home = TempDir::new().unwrap();
    analyzer_bin(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("transcript"))
        .stdout(predicate::str::contains("--sample"))
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--model"))
        .stdout(predicate::str::contains("--expanded-model"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_output() {
    let home = TempDir::new().unwrap();
    analyzer_bin(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("transcript-analyzer"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let home = TempDir::new().unwrap();
    analyzer_bin(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("transcript-analyzer"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_help() {
    let home = TempDir::new().unwrap();
    analyzer_bin(&home)
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("path"));
}

#[test]
fn config_set_then_get() {
    let home = TempDir::new().unwrap();
    analyzer_bin(&home)
        .args(["config", "set", "model", "gpt-4o-mini"])
        .assert()
        .success();

    analyzer_bin(&home)
        .args(["config", "get", "model"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gpt-4o-mini"));
}

#[test]
fn config_list_masks_api_key() {
    let home = TempDir::new().unwrap();
    analyzer_bin(&home)
        .args(["config", "set", "api_key", "sk-abcdefghijklmnop"])
        .assert()
        .success();

    analyzer_bin(&home)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api_key"))
        .stdout(predicate::str::contains("sk-abcdefghijklmnop").not());
}

#[test]
fn config_get_unknown_key() {
    let home = TempDir::new().unwrap();
    analyzer_bin(&home)
        .args(["config", "get", "duration"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_set_invalid_threshold() {
    let home = TempDir::new().unwrap();
    analyzer_bin(&home)
        .args(["config", "set", "expanded_threshold", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expanded_threshold"));
}

#[test]
fn sample_conflicts_with_file() {
    let home = TempDir::new().unwrap();
    analyzer_bin(&home)
        .args(["--sample", "call.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn missing_api_key_fails() {
    let home = TempDir::new().unwrap();
    analyzer_bin(&home)
        .arg("--sample")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn missing_transcript_file_fails() {
    let home = TempDir::new().unwrap();
    analyzer_bin(&home)
        .env("OPENAI_API_KEY", "sk-test")
        .arg(home.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn empty_stdin_reports_not_enough_content() {
    let home = TempDir::new().unwrap();
    analyzer_bin(&home)
        .env("OPENAI_API_KEY", "sk-test")
        .env("OPENAI_BASE_URL", "http://127.0.0.1:1")
        .write_stdin("   \n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not enough content to summarize"));
}

#[test]
fn empty_file_as_json() {
    let home = TempDir::new().unwrap();
    let transcript = home.path().join("empty.txt");
    std::fs::write(&transcript, "").unwrap();

    let output = analyzer_bin(&home)
        .env("OPENAI_API_KEY", "sk-test")
        .env("OPENAI_BASE_URL", "http://127.0.0.1:1")
        .arg("--json")
        .arg(&transcript)
        .output()
        .unwrap();

    assert!(output.status.success());
    let body: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        body,
        json!({
            "summary": "Not enough content to summarize",
            "keyPoints": "None",
            "recommendations": "None"
        })
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn analyzes_sample_against_mock_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "gpt-3.5-turbo",
            "choices": [{
                "message": {
                    "role": "assistant",
                    "function_call": {
                        "name": "analyze_transcript",
                        "arguments": "{\"summary\": \"Router replaced\", \"keyPoints\": \"● Outage since Monday\", \"recommendations\": \"● Ship a new router\"}"
                    }
                }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    analyzer_bin(&home)
        .env("OPENAI_API_KEY", "sk-test")
        .env("OPENAI_BASE_URL", server.uri())
        .arg("--sample")
        .assert()
        .success()
        .stdout(predicate::str::contains("Router replaced"))
        .stdout(predicate::str::contains("● Outage since Monday"))
        .stdout(predicate::str::contains("● Ship a new router"));
}

#[test]
fn unreachable_service_still_prints_placeholder() {
    let home = TempDir::new().unwrap();
    analyzer_bin(&home)
        .env("OPENAI_API_KEY", "sk-test")
        .env("OPENAI_BASE_URL", "http://127.0.0.1:1")
        .args(["--sample", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unable to respond to request"));
}
