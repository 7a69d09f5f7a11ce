//! Integration tests for the Gemini judge against a mock HTTP server

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;
use tweet_audit::adapters::judge::{GeminiJudge, Judge};
use tweet_audit::config::{secret_string, AuditConfig};
use tweet_audit::core::analyze::BatchController;
use tweet_audit::domain::{AuditError, JudgeError, Record};

const ENDPOINT_PATH: &str = "/models/gemini-2.5-flash:generateContent";
const API_KEY: &str = "test-key-123";

fn config_for(server: &ServerGuard) -> AuditConfig {
    let mut config = AuditConfig::default();
    config.account.username = "jane".to_string();
    config.gemini.api_key = Some(secret_string(API_KEY.to_string()));
    config.gemini.base_url = server.url();
    config.gemini.rate_limit_seconds = 0.0;
    config.gemini.timeout_seconds = 5;
    config
}

/// Wraps model output the way generateContent returns it
fn candidate_body(text: &str) -> String {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": text }]
            },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

#[tokio::test]
async fn test_delete_verdict_flags_record() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", ENDPOINT_PATH)
        .match_header("x-goog-api-key", API_KEY)
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(candidate_body(
            r#"{"decision": "DELETE", "reason": "Contains profanity"}"#,
        ))
        .create_async()
        .await;

    let judge = GeminiJudge::new(&config_for(&server)).unwrap();
    let decision = judge
        .evaluate(&Record::new("1234", "this is a terrible tweet"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(decision.should_flag);
    assert_eq!(decision.record_id, "1234");
    assert_eq!(decision.reference_url, "https://x.com/jane/status/1234");
    assert_eq!(decision.reason.as_deref(), Some("Contains profanity"));
}

#[tokio::test]
async fn test_keep_verdict_in_code_fence() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(candidate_body("```json\n{\"decision\": \"keep\"}\n```"))
        .create_async()
        .await;

    let judge = GeminiJudge::new(&config_for(&server)).unwrap();
    let decision = judge.evaluate(&Record::new("7", "hello world")).await.unwrap();

    assert!(!decision.should_flag);
    assert!(decision.reason.is_none());
}

#[tokio::test]
async fn test_prompt_contains_tweet_text() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", ENDPOINT_PATH)
        .match_body(Matcher::Regex("unmistakable tweet body".to_string()))
        .with_status(200)
        .with_body(candidate_body(r#"{"decision": "KEEP", "reason": ""}"#))
        .create_async()
        .await;

    let judge = GeminiJudge::new(&config_for(&server)).unwrap();
    judge
        .evaluate(&Record::new("1", "unmistakable tweet body"))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_maps_to_api_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT_PATH)
        .with_status(500)
        .with_body("internal failure")
        .create_async()
        .await;

    let judge = GeminiJudge::new(&config_for(&server)).unwrap();
    let err = judge.evaluate(&Record::new("1", "text")).await.unwrap_err();

    match err {
        JudgeError::Api { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("internal failure"));
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_no_candidates_is_empty_response() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT_PATH)
        .with_status(200)
        .with_body(r#"{"candidates": []}"#)
        .create_async()
        .await;

    let judge = GeminiJudge::new(&config_for(&server)).unwrap();
    let err = judge.evaluate(&Record::new("1", "text")).await.unwrap_err();

    assert!(matches!(err, JudgeError::EmptyResponse));
}

#[tokio::test]
async fn test_unknown_decision_is_invalid_response() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT_PATH)
        .with_status(200)
        .with_body(candidate_body(r#"{"decision": "MAYBE"}"#))
        .create_async()
        .await;

    let judge = GeminiJudge::new(&config_for(&server)).unwrap();
    let err = judge.evaluate(&Record::new("1", "text")).await.unwrap_err();

    match err {
        JudgeError::InvalidResponse(message) => assert!(message.contains("MAYBE")),
        other => panic!("expected invalid response, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_answer_is_invalid_response() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT_PATH)
        .with_status(200)
        .with_body(candidate_body("I think you should delete it"))
        .create_async()
        .await;

    let judge = GeminiJudge::new(&config_for(&server)).unwrap();
    let err = judge.evaluate(&Record::new("1", "text")).await.unwrap_err();

    assert!(matches!(err, JudgeError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_failure_mid_batch_through_controller() {
    let mut server = Server::new_async().await;
    let _ok = server
        .mock("POST", ENDPOINT_PATH)
        .match_body(Matcher::Regex("first tweet".to_string()))
        .with_status(200)
        .with_body(candidate_body(r#"{"decision": "DELETE", "reason": "x"}"#))
        .create_async()
        .await;
    let _fail = server
        .mock("POST", ENDPOINT_PATH)
        .match_body(Matcher::Regex("second tweet".to_string()))
        .with_status(503)
        .with_body("overloaded")
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let mut config = config_for(&server);
    config.paths.transformed = dir.path().join("tweets.csv");
    config.paths.checkpoint = dir.path().join("checkpoint.txt");
    config.paths.results = dir.path().join("results.csv");
    std::fs::write(
        &config.paths.transformed,
        "id,text\n1,first tweet\n2,second tweet\n",
    )
    .unwrap();

    let judge = GeminiJudge::new(&config).unwrap();
    let controller = BatchController::new(&config, Arc::new(judge));
    let err = controller.run_batch(2).await.unwrap_err();

    match err {
        AuditError::Evaluation { record_id, source } => {
            assert_eq!(record_id, "2");
            assert!(matches!(source, JudgeError::Api { status: 503, .. }));
        }
        other => panic!("expected evaluation error, got {other:?}"),
    }
    assert!(!config.paths.checkpoint.exists());
    assert!(std::fs::read_to_string(&config.paths.results)
        .unwrap()
        .contains("https://x.com/jane/status/1,false"));
}
