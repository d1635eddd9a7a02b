//! Exit codes and messages of the `autocomplete` binary
//!
//! None of these reach the network: they stop at argument parsing, settings
//! loading, or hit a local mock server.

use serde_json::json;
use std::process::{Command, Output};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_autocomplete"))
        .args(args)
        .env_remove("AUTOCOMPLETE_SETTINGS_PATH")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run autocomplete binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_help_flag() {
    let output = run_cli(&["--help"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Query autocomplete suggestions"));
    for source in ["google", "youtube", "bing", "amazon", "duckduckgo"] {
        assert!(out.contains(source), "missing {} in help", source);
    }
}

#[test]
fn test_version_flag() {
    let output = run_cli(&["--version"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).trim().ends_with(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_google_help_lists_locale_options() {
    let output = run_cli(&["google", "--help"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Get Google autocomplete suggestions"));
    assert!(out.contains("-l, --lang"));
    assert!(out.contains("-c, --country"));
    assert!(out.contains("-d, --delay"));
}

#[test]
fn test_amazon_help_has_no_locale_options() {
    let output = run_cli(&["amazon", "--help"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(!out.contains("--lang"));
    assert!(!out.contains("--country"));
    assert!(out.contains("--delay"));
}

#[test]
fn test_no_command_shows_usage() {
    let output = run_cli(&[]);

    let combined = stdout(&output) + &stderr(&output);
    assert!(combined.contains("Usage:"));
}

#[test]
fn test_unknown_command() {
    let output = run_cli(&["unknown"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("unknown"));
}

#[test]
fn test_missing_query() {
    for source in ["google", "youtube", "bing", "amazon", "duckduckgo", "ddg"] {
        let output = run_cli(&[source]);

        assert_eq!(output.status.code(), Some(1), "source: {}", source);
        assert!(stderr(&output).contains("query"), "source: {}", source);
    }
}

#[test]
fn test_missing_config_file() {
    let output = run_cli(&["--config", "/nonexistent/autocomplete.yml", "google", "q"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error:"));
}

#[tokio::test]
async fn test_end_to_end_against_mock() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/complete/search"))
        .and(query_param("ds", "yt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["cats", ["cats 1", "cats 2"]])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ac/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("settings.yml");
    let uri = server.uri();
    std::fs::write(
        &settings,
        format!(
            "endpoints:\n  google: \"{uri}/complete/search\"\n  duckduckgo: \"{uri}/ac/\"\n"
        ),
    )
    .unwrap();
    let settings = settings.to_string_lossy().into_owned();

    let ok = tokio::task::spawn_blocking({
        let settings = settings.clone();
        move || run_cli(&["--config", &settings, "youtube", "cats", "-d", "0"])
    })
    .await
    .unwrap();
    assert_eq!(ok.status.code(), Some(0));
    assert_eq!(stdout(&ok), "cats 1\ncats 2\n");

    let failed = tokio::task::spawn_blocking(move || {
        run_cli(&["--config", &settings, "ddg", "cats", "-d", "0"])
    })
    .await
    .unwrap();
    assert_eq!(failed.status.code(), Some(1));
    assert!(stderr(&failed).contains("Error: HTTP error: 503"));
}
