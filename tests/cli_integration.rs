//! CLI integration tests for prd-outliner
//!
//! These run the real binary in a scratch directory with no API key in the
//! environment. Generation runs against a local mock of the Responses API,
//! so nothing reaches the hosted service.

use assert_cmd::assert::OutputAssertExt;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get a command instance for the prd-outliner binary, isolated in `dir`.
fn outliner_cmd(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("prd-outliner"));
    cmd.current_dir(dir).env_remove("OPENAI_API_KEY");
    for var in ["HTTP_PROXY", "HTTPS_PROXY", "ALL_PROXY", "http_proxy", "https_proxy", "all_proxy"] {
        cmd.env_remove(var);
    }
    cmd
}

/// Run the binary on a blocking thread so the mock server keeps serving.
async fn run_outliner(dir: &Path, env: &[(&str, &str)], args: &[&str]) -> Output {
    let dir = dir.to_path_buf();
    let env: Vec<(String, String)> = env
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();

    tokio::task::spawn_blocking(move || outliner_cmd(&dir).envs(env).args(args).output().unwrap())
        .await
        .unwrap()
}

/// Mount a mock Responses endpoint expecting one call with `api_key`.
async fn mount_responses(server: &MockServer, api_key: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .and(header("authorization", format!("Bearer {}", api_key).as_str()))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

fn write_config(dir: &Path, server: &MockServer, extra: &str) {
    fs::write(
        dir.join("prd-outliner.yaml"),
        format!("api_base_url: {}/v1\n{}", server.uri(), extra),
    )
    .unwrap();
}

// =============================================================================
// Listings
// =============================================================================

#[test]
fn test_sections_lists_catalog() {
    let dir = TempDir::new().unwrap();

    outliner_cmd(dir.path())
        .arg("sections")
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] Context"))
        .stdout(predicate::str::contains("[ ] Requirements"))
        .stdout(predicate::str::contains("users-jtbd"));
}

#[test]
fn test_models_lists_both_models() {
    let dir = TempDir::new().unwrap();

    outliner_cmd(dir.path())
        .arg("models")
        .assert()
        .success()
        .stdout(predicate::str::contains("* gpt-4o-mini"))
        .stdout(predicate::str::contains("gpt-4o "));
}

#[test]
fn test_config_prints_defaults() {
    let dir = TempDir::new().unwrap();

    outliner_cmd(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("model: gpt-4o-mini"))
        .stdout(predicate::str::contains("temperature: 0.3"));
}

#[test]
fn test_config_file_in_working_directory_is_used() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("prd-outliner.yaml"), "model: gpt-4o\n").unwrap();

    outliner_cmd(dir.path())
        .arg("models")
        .assert()
        .success()
        .stdout(predicate::str::contains("* gpt-4o "));
}

#[test]
fn test_invalid_config_is_user_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("prd-outliner.yaml"), "temperature: 3\n").unwrap();

    outliner_cmd(dir.path())
        .arg("sections")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config validation failed"));
}

// =============================================================================
// Prompt preview
// =============================================================================

#[test]
fn test_prompt_preview_without_key() {
    let dir = TempDir::new().unwrap();

    outliner_cmd(dir.path())
        .args([
            "prompt",
            "--problem",
            "  Users forget passwords  ",
            "--goal",
            "Reduce reset tickets by 30%",
            "--section",
            "Context,Success Metrics",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- **Problem**: Users forget passwords\n",
        ))
        .stdout(predicate::str::contains("- Context\n- Success Metrics\n"))
        .stdout(predicate::str::contains("## Requirements"));
}

#[test]
fn test_prompt_no_sections_falls_back_to_context() {
    let dir = TempDir::new().unwrap();

    outliner_cmd(dir.path())
        .args(["prompt", "--problem", "p", "--goal", "g", "--no-sections"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Context\n\n## Requirements"));
}

// =============================================================================
// Generate preconditions
// =============================================================================

#[test]
fn test_generate_without_key_is_validation_error() {
    let dir = TempDir::new().unwrap();

    outliner_cmd(dir.path())
        .args(["generate", "--problem", "p", "--goal", "g"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing API key"));
}

#[test]
fn test_generate_blank_problem_is_validation_error() {
    let dir = TempDir::new().unwrap();

    outliner_cmd(dir.path())
        .env("OPENAI_API_KEY", "sk-test")
        .args(["generate", "--problem", "   ", "--goal", "g"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("problem"));
}

#[test]
fn test_generate_bad_temperature_is_user_error() {
    let dir = TempDir::new().unwrap();

    outliner_cmd(dir.path())
        .env("OPENAI_API_KEY", "sk-test")
        .args(["generate", "--problem", "p", "--goal", "g", "--temperature", "1.5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("temperature must be between"));
}

#[test]
fn test_generate_unreachable_service_is_generation_error() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("prd-outliner.yaml"),
        "api_base_url: http://127.0.0.1:1/v1\n",
    )
    .unwrap();

    outliner_cmd(dir.path())
        .env("OPENAI_API_KEY", "sk-test")
        .args(["generate", "--problem", "p", "--goal", "g", "--output", "out.md"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Generation failed"));

    assert!(!dir.path().join("out.md").exists());
}

#[test]
fn test_generate_missing_secrets_file_names_path() {
    let dir = TempDir::new().unwrap();

    outliner_cmd(dir.path())
        .env("OPENAI_API_KEY", "sk-env")
        .args(["generate", "--problem", "p", "--goal", "g", "--secrets", "typo.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("typo.toml"))
        .stderr(predicate::str::contains("not found"));
}

// =============================================================================
// Generate against a mock service
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_generate_prints_and_exports_outline() {
    let dir = TempDir::new().unwrap();
    let server = MockServer::start().await;
    mount_responses(
        &server,
        "sk-file",
        ResponseTemplate::new(200)
            .set_body_json(json!({"output_text": "## Context\nPassword resets are slow.\n"})),
    )
    .await;
    write_config(dir.path(), &server, "");
    fs::write(dir.path().join("secrets.toml"), "OPENAI_API_KEY = \"sk-file\"\n").unwrap();

    let output = run_outliner(
        dir.path(),
        &[],
        &[
            "generate",
            "--problem",
            "Users forget passwords",
            "--goal",
            "Reduce reset tickets",
            "--model",
            "gpt-4o",
            "--temperature",
            "0.6",
            "--secrets",
            "secrets.toml",
            "--output",
            "docs/",
            "--show-prompt",
        ],
    )
    .await;

    output
        .assert()
        .success()
        .stdout("## Context\nPassword resets are slow.\n")
        .stderr(predicate::str::contains("## Inputs"))
        .stderr(predicate::str::contains("Saved outline to"));

    let exported = fs::read_to_string(dir.path().join("docs").join("prd_outline.md")).unwrap();
    assert_eq!(exported, "## Context\nPassword resets are slow.\n");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let request: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(request["model"], "gpt-4o");
    assert_eq!(request["temperature"], 0.6);
    assert_eq!(request["input"][0]["role"], "system");
    assert_eq!(request["input"][1]["role"], "user");
    assert!(
        request["input"][1]["content"]
            .as_str()
            .unwrap()
            .contains("- **Problem**: Users forget passwords")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_generate_uses_secrets_file_next_to_config() {
    let dir = TempDir::new().unwrap();
    let project = dir.path().join("proj");
    fs::create_dir(&project).unwrap();

    let server = MockServer::start().await;
    mount_responses(
        &server,
        "sk-proj",
        ResponseTemplate::new(200).set_body_json(json!({"output_text": "## Context\n"})),
    )
    .await;
    write_config(&project, &server, "secrets_file: secrets.toml\n");
    fs::write(project.join("secrets.toml"), "OPENAI_API_KEY = \"sk-proj\"\n").unwrap();

    let output = run_outliner(
        dir.path(),
        &[],
        &[
            "--config",
            "proj/prd-outliner.yaml",
            "generate",
            "--problem",
            "p",
            "--goal",
            "g",
        ],
    )
    .await;

    output.assert().success().stdout("## Context\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_generate_service_error_is_reported() {
    let dir = TempDir::new().unwrap();
    let server = MockServer::start().await;
    mount_responses(
        &server,
        "sk-bad",
        ResponseTemplate::new(401)
            .set_body_json(json!({"error": {"message": "Incorrect API key provided"}})),
    )
    .await;
    write_config(dir.path(), &server, "");

    let output = run_outliner(
        dir.path(),
        &[("OPENAI_API_KEY", "sk-bad")],
        &["generate", "--problem", "p", "--goal", "g"],
    )
    .await;

    output
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Incorrect API key provided"));
}
