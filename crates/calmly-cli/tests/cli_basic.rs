//! Basic CLI E2E tests.
//!
//! Tests invoke the built `calmly` binary with an isolated data directory.

use std::path::Path;
use std::process::Command;

use serde_json::json;

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(home: &Path, api_url: Option<&str>, args: &[&str]) -> (i32, String, String) {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_calmly"));
    cmd.args(args)
        .env("CALMLY_HOME", home)
        .env_remove("CALMLY_API_URL")
        .env_remove("CALMLY_PASSWORD")
        .env_remove("RUST_LOG");
    if let Some(url) = api_url {
        cmd.env("CALMLY_API_URL", url);
    }
    let output = cmd.output().expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

#[test]
fn test_help_lists_commands() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), None, &["--help"]);
    assert_eq!(code, 0);
    for command in ["auth", "mood", "journal", "dashboard", "profile", "config"] {
        assert!(stdout.contains(command), "missing {command} in help");
    }
}

#[test]
fn test_config_get_set_roundtrip() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), None, &["config", "get", "sync.fan_out"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "concurrent");

    let (code, _, _) = run_cli(home.path(), None, &["config", "set", "sync.fan_out", "sequential"]);
    assert_eq!(code, 0);
    let (_, stdout, _) = run_cli(home.path(), None, &["config", "get", "sync.fan_out"]);
    assert_eq!(stdout.trim(), "sequential");
}

#[test]
fn test_config_unknown_key_fails() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(home.path(), None, &["config", "get", "no.such.key"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_config_path_is_inside_home() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), None, &["config", "path"]);
    assert_eq!(code, 0);
    assert!(stdout.trim().ends_with("config.toml"));
    assert!(home.path().join("config.toml").exists());
}

#[test]
fn test_status_when_logged_out() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), None, &["auth", "status"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Not logged in"));
}

#[test]
fn test_mood_list_requires_login() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(home.path(), None, &["mood", "list"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Not logged in"));
    assert!(stderr.contains("calmly auth login"));
}

#[test]
fn test_mood_add_rejects_out_of_range_rating() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(
        home.path().join("session.json"),
        json!({"access_token": "tok", "user": {"id": 1, "name": "Ada", "email": "ada@example.com"}}).to_string(),
    )
    .unwrap();
    let (code, _, stderr) = run_cli(home.path(), Some("http://127.0.0.1:9"), &["mood", "add", "11", "too much"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("rating"));
}

#[test]
fn test_mood_add_requires_commentary() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(
        home.path().join("session.json"),
        json!({"access_token": "tok", "user": {"id": 1, "name": "Ada", "email": "ada@example.com"}}).to_string(),
    )
    .unwrap();
    let (code, _, stderr) = run_cli(home.path(), Some("http://127.0.0.1:9"), &["mood", "add", "7"]);
    assert_eq!(code, 2, "expected a usage error: {stderr}");
    assert!(stderr.contains("<COMMENTARY>"));
    assert!(!stderr.contains("must not be blank"));

    let (code, _, _) = run_cli(home.path(), None, &["mood", "edit", "3", "7"]);
    assert_eq!(code, 2);
}

#[test]
fn test_mood_add_help_shows_required_commentary() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), None, &["mood", "add", "--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("<COMMENTARY>"));
    assert!(!stdout.contains("default: \"\""));
}

#[test]
fn test_mood_scale_needs_no_session() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), None, &["mood", "scale"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.lines().count(), 10);
    assert!(stdout.contains("Perfect"));
}

#[test]
fn test_login_then_dashboard() {
    let home = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_body(r#"{"access_token":"abc","token_type":"bearer"}"#)
        .create();
    server
        .mock("GET", "/users/")
        .match_header("authorization", "Bearer abc")
        .with_status(200)
        .with_body(json!([{"id": 1, "name": "Ada", "email": "ada@example.com"}]).to_string())
        .create();
    server
        .mock("GET", "/users/1/moods/")
        .match_header("authorization", "Bearer abc")
        .with_status(200)
        .with_body(
            json!([
                {"id": 1, "user_id": 1, "mood": 6, "commentary": "a", "date": "2026-04-01T09:00:00"},
                {"id": 2, "user_id": 1, "mood": 8, "commentary": "b", "date": "2026-04-02T09:00:00"}
            ])
            .to_string(),
        )
        .create();
    server
        .mock("GET", "/users/1/moods/1/journals/")
        .with_status(200)
        .with_body(
            json!([{"id": 10, "mood_id": 1, "title": "t", "content": "c", "date": "2026-04-01T10:00:00"}])
                .to_string(),
        )
        .create();
    server
        .mock("GET", "/users/1/moods/2/journals/")
        .with_status(200)
        .with_body("[]")
        .create();

    let url = server.url();
    let (code, stdout, stderr) = run_cli(
        home.path(),
        Some(&url),
        &["auth", "login", "ada@example.com", "--password", "hunter22"],
    );
    assert_eq!(code, 0, "login failed: {stderr}");
    assert!(stdout.contains("Logged in as Ada"));
    assert!(home.path().join("session.json").exists());

    let (code, stdout, stderr) = run_cli(home.path(), Some(&url), &["dashboard", "--json"]);
    assert_eq!(code, 0, "dashboard failed: {stderr}");
    let snapshot: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(snapshot["stats"]["total_moods"], 2);
    assert_eq!(snapshot["stats"]["total_journals"], 1);
    assert_eq!(snapshot["stats"]["average_mood"], 7.0);
    assert_eq!(snapshot["recent_moods"][0]["commentary"], "b");

    let (code, stdout, _) = run_cli(home.path(), Some(&url), &["auth", "logout"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Logged out"));
    assert!(!home.path().join("session.json").exists());
}
