use assert_cmd::Command;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// The binary run inside `dir` with no ambient configuration leaking in.
fn masterchef(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("masterchef").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("GROQ_API_KEY")
        .env_remove("GROQ_API_ENDPOINT")
        .env_remove("GROQ_MODEL")
        .env_remove("MASTERCHEF_HISTORY_FILE")
        .env_remove("MASTERCHEF_SYSTEM_PROMPT")
        .env_remove("MASTERCHEF_TIMEOUT")
        .env_remove("MASTERCHEF_VERBOSE");
    cmd
}

fn encode(prompt: &str) -> String {
    STANDARD.encode(prompt).trim_end_matches('=').to_string()
}

fn read_history(dir: &Path) -> Vec<Value> {
    let raw = fs::read_to_string(dir.join("conversation_history.json")).unwrap();
    serde_json::from_str::<Value>(&raw)
        .unwrap()
        .as_array()
        .unwrap()
        .clone()
}

#[test]
fn test_no_prompt_exits_with_one() {
    let temp_dir = TempDir::new().unwrap();

    masterchef(temp_dir.path())
        .assert()
        .code(1)
        .stdout("No code provided.\n");
}

#[test]
fn test_malformed_base64_exits_with_one() {
    let temp_dir = TempDir::new().unwrap();

    masterchef(temp_dir.path())
        .arg("%%%not-base64%%%")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Decoding error:"));
}

#[test]
fn test_missing_api_key_exits_with_one() {
    let temp_dir = TempDir::new().unwrap();

    masterchef(temp_dir.path())
        .arg(encode("hello"))
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Error initializing Groq client:"));

    assert!(!temp_dir.path().join("conversation_history.json").exists());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_successful_turn_prints_reply_and_saves_history() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "Add fresh basil."}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    masterchef(temp_dir.path())
        .env("GROQ_API_KEY", "test-key")
        .env("GROQ_API_ENDPOINT", server.uri())
        .arg(encode("How do I improve tomato sauce?"))
        .assert()
        .success()
        .stdout("Add fresh basil.\n");

    let history = read_history(temp_dir.path());
    assert_eq!(history.len(), 3);
    assert_eq!(history[0]["role"], "system");
    assert_eq!(history[1]["role"], "user");
    assert_eq!(history[1]["content"], "How do I improve tomato sauce?");
    assert_eq!(history[2]["role"], "assistant");
    assert_eq!(history[2]["content"], "Add fresh basil.");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_api_failure_prints_error_and_keeps_history() {
    let temp_dir = TempDir::new().unwrap();
    let history_path = temp_dir.path().join("conversation_history.json");
    let existing = r#"[{"role": "system", "content": "persona"}]"#;
    fs::write(&history_path, existing).unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    masterchef(temp_dir.path())
        .env("GROQ_API_KEY", "test-key")
        .env("GROQ_API_ENDPOINT", server.uri())
        .arg(encode("Still there?"))
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("Error in LLM processing:"));

    assert_eq!(fs::read_to_string(&history_path).unwrap(), existing);
}

#[test]
fn test_clear_removes_history_file() {
    let temp_dir = TempDir::new().unwrap();
    let history_path = temp_dir.path().join("conversation_history.json");
    fs::write(&history_path, "[]").unwrap();

    masterchef(temp_dir.path())
        .arg("--clear")
        .assert()
        .success()
        .stdout("Conversation history cleared.\n");

    assert!(!history_path.exists());
}
