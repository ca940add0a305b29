//! Integration tests for the Anthropic client.
//!
//! These tests run `AnthropicClient` against a local wiremock server.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use codeassist::auth::ApiKey;
use codeassist::client::anthropic::AnthropicClient;
use codeassist::client::{
    submit, CompletionClient, CompletionError, CompletionRequest, CompletionResult,
};

fn client_for(server: &MockServer) -> AnthropicClient {
    let key = ApiKey::from_value(Some("test-key".to_string())).unwrap();
    AnthropicClient::with_api_base(key, server.uri())
}

fn request() -> CompletionRequest {
    CompletionRequest::new("Say hi", "claude-3-haiku-20240307")
        .with_max_tokens(64)
        .with_temperature(0.2)
}

fn error_body(message: &str) -> serde_json::Value {
    json!({
        "type": "error",
        "error": { "type": "some_error", "message": message }
    })
}

#[tokio::test]
async fn success_returns_first_text_block() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(json!({
            "model": "claude-3-haiku-20240307",
            "max_tokens": 64,
            "messages": [{ "role": "user", "content": "Say hi" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "msg_1",
            "type": "message",
            "role": "assistant",
            "content": [
                { "type": "text", "text": "hi" },
                { "type": "text", "text": "ignored" }
            ],
            "stop_reason": "end_turn"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = client_for(&server).complete(&request()).await.unwrap();
    assert_eq!(text, "hi");
}

#[tokio::test]
async fn unauthorized_maps_to_auth_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(401).set_body_json(error_body("invalid x-api-key")))
        .mount(&server)
        .await;

    let err = client_for(&server).complete(&request()).await.unwrap_err();
    assert_eq!(
        err,
        CompletionError::AuthFailed("invalid x-api-key".to_string())
    );
}

#[tokio::test]
async fn rate_limit_maps_to_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(429).set_body_json(error_body("slow down")))
        .mount(&server)
        .await;

    let err = client_for(&server).complete(&request()).await.unwrap_err();
    assert_eq!(err, CompletionError::RateLimited("slow down".to_string()));
}

#[tokio::test]
async fn rate_limit_sentinel_keeps_service_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(error_body("Number of request tokens has exceeded your rate limit")),
        )
        .mount(&server)
        .await;

    let text = submit(&client_for(&server), &request()).await.into_text();
    assert_eq!(
        text,
        "[API ERROR] rate limited: Number of request tokens has exceeded your rate limit"
    );
}

#[tokio::test]
async fn server_error_keeps_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(529).set_body_json(error_body("Overloaded")))
        .mount(&server)
        .await;

    let err = client_for(&server).complete(&request()).await.unwrap_err();
    assert_eq!(
        err,
        CompletionError::ApiError {
            status: 529,
            message: "Overloaded".to_string()
        }
    );
}

#[tokio::test]
async fn non_json_error_body_uses_fallback_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).complete(&request()).await.unwrap_err();
    assert_eq!(
        err,
        CompletionError::ApiError {
            status: 500,
            message: "Unknown error".to_string()
        }
    );
}

#[tokio::test]
async fn submit_turns_failure_into_sentinel() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(500).set_body_json(error_body("boom")))
        .expect(1)
        .mount(&server)
        .await;

    let result = submit(&client_for(&server), &request()).await;
    assert!(matches!(result, CompletionResult::Failure(_)));
    let text = result.into_text();
    assert!(text.starts_with("[API ERROR]"));
    assert!(text.contains("boom"));
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    let key = ApiKey::from_value(Some("test-key".to_string())).unwrap();
    let client = AnthropicClient::with_api_base(key, "http://127.0.0.1:9");

    let err = client.complete(&request()).await.unwrap_err();
    assert!(matches!(err, CompletionError::NetworkError(_)));
}
