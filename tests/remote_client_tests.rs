// Tests for the unified remote API client, against a mocked endpoint.

use podscribe::config::RemoteConfig;
use podscribe::remote::{RemoteClient, RemoteError};
use std::path::PathBuf;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: String) -> RemoteClient {
    let config = RemoteConfig {
        base_url,
        ..RemoteConfig::default()
    };
    RemoteClient::new(&config, "test-key".to_string()).unwrap()
}

fn write_fake_audio(dir: &tempfile::TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, b"not really audio").unwrap();
    path
}

#[tokio::test]
async fn test_transcribe_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"text": "hello world"})),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let audio = write_fake_audio(&dir, "clip.mp3");

    let client = test_client(server.uri());
    let text = client.transcribe(&audio).await.unwrap();
    assert_eq!(text, "hello world");
}

#[tokio::test]
async fn test_transcribe_server_error_carries_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let audio = write_fake_audio(&dir, "clip.wav");

    let client = test_client(server.uri());
    let err = client.transcribe(&audio).await.unwrap_err();
    match err {
        RemoteError::Service { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "internal error");
        }
        other => panic!("expected Service error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_transcribe_missing_text_field_is_service_error() {
    let server = MockServer::start().await;

    // 200 but the expected `text` field is absent
    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"detail": "odd shape"})),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let audio = write_fake_audio(&dir, "clip.mp3");

    let client = test_client(server.uri());
    let err = client.transcribe(&audio).await.unwrap_err();
    match err {
        RemoteError::Service { status, body } => {
            assert_eq!(status, 200);
            assert!(body.contains("odd shape"));
        }
        other => panic!("expected Service error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_transcribe_unreadable_file_is_transport_error() {
    let server = MockServer::start().await;
    let client = test_client(server.uri());

    let err = client
        .transcribe(std::path::Path::new("/nonexistent/clip.mp3"))
        .await
        .unwrap_err();
    assert!(matches!(err, RemoteError::Transport(_)));

    // Nothing should have reached the server
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_summarize_success_and_request_shape() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(serde_json::json!({
            "temperature": 0.7,
            "max_tokens": 150
        })))
        .and(body_string_contains("Summarize the given text concisely."))
        .and(body_string_contains("a long transcript"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "a short summary"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(server.uri());
    let summary = client.summarize("a long transcript").await.unwrap();
    assert_eq!(summary, "a short summary");
}

#[tokio::test]
async fn test_summarize_sends_empty_transcript_as_is() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("\"content\":\"\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "nothing to say"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(server.uri());
    let summary = client.summarize("").await.unwrap();
    assert_eq!(summary, "nothing to say");
}

#[tokio::test]
async fn test_summarize_empty_choices_is_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})))
        .mount(&server)
        .await;

    let client = test_client(server.uri());
    let err = client.summarize("some transcript").await.unwrap_err();
    assert!(matches!(err, RemoteError::Service { status: 200, .. }));
}

#[tokio::test]
async fn test_summarize_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limit exceeded"))
        .mount(&server)
        .await;

    let client = test_client(server.uri());
    let err = client.summarize("some transcript").await.unwrap_err();
    match err {
        RemoteError::Service { status, body } => {
            assert_eq!(status, 429);
            assert!(body.contains("rate limit"));
        }
        other => panic!("expected Service error, got {:?}", other),
    }
}
