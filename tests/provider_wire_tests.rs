//! Unit Tests for Provider Adapter HTTP Integration
//!
//! UNIT UNDER TEST: the six provider adapters' wire behavior
//!
//! BUSINESS RESPONSIBILITY:
//!   - Send each provider's fixed endpoint path, auth convention, and
//!     request payload shape
//!   - Extract the assistant text from each provider's response envelope
//!   - Fail fast on a missing credential without any network call
//!   - Surface non-2xx responses as network errors, with no retry
//!
//! TEST COVERAGE:
//!   - Bearer-token chat-completions providers (OpenAI, Perplexity,
//!     DeepSeek, Grok): path, auth header, model, envelope
//!   - Gemini: query-parameter auth and generateContent envelope
//!   - Anthropic: x-api-key / anthropic-version headers and envelope
//!   - Prompt interpolation of request parameters
//!   - 401 and 500 error surfacing

use ideaforge::providers::{
    AnthropicAdapter, DeepSeekAdapter, GeminiAdapter, GrokAdapter, IdeaProvider, OpenAIAdapter,
    PerplexityAdapter,
};
use ideaforge::{GenerationRequest, IdeaError};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_request() -> GenerationRequest {
    GenerationRequest {
        industry: "healthcare".to_string(),
        target_market: "small clinics".to_string(),
        technologies: "AI".to_string(),
        additional_notes: String::new(),
    }
}

fn chat_reply(content: &str) -> serde_json::Value {
    serde_json::json!({
        "choices": [{
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

// ============================================================================
// Chat-completions family
// ============================================================================

#[tokio::test]
async fn test_openai_sends_bearer_auth_and_model() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(serde_json::json!({
            "model": "gpt-3.5-turbo",
            "temperature": 0.7,
            "max_tokens": 1000
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("three ideas")))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = OpenAIAdapter::with_base_url(reqwest::Client::new(), server.uri());
    let raw = adapter
        .generate(&test_request(), Some("test-key"))
        .await
        .unwrap();

    assert_eq!(raw, "three ideas");
}

#[tokio::test]
async fn test_openai_interpolates_request_into_prompt() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("ok")))
        .mount(&server)
        .await;

    let adapter = OpenAIAdapter::with_base_url(reqwest::Client::new(), server.uri());
    let mut request = test_request();
    request.additional_notes = "must be HIPAA compliant".to_string();
    adapter.generate(&request, Some("test-key")).await.unwrap();

    let received = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    let user_prompt = body["messages"][1]["content"].as_str().unwrap();

    assert!(user_prompt.contains("healthcare industry"));
    assert!(user_prompt.contains("targeting small clinics market"));
    assert!(user_prompt.contains("using AI technology"));
    assert!(user_prompt.contains("Additional requirements: must be HIPAA compliant"));
}

#[tokio::test]
async fn test_perplexity_endpoint_and_model() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer pplx-key"))
        .and(body_partial_json(serde_json::json!({ "model": "sonar-medium-online" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("reply")))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = PerplexityAdapter::with_base_url(reqwest::Client::new(), server.uri());
    let raw = adapter
        .generate(&test_request(), Some("pplx-key"))
        .await
        .unwrap();
    assert_eq!(raw, "reply");
}

#[tokio::test]
async fn test_deepseek_endpoint_and_model() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(serde_json::json!({ "model": "deepseek-chat" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("reply")))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = DeepSeekAdapter::with_base_url(reqwest::Client::new(), server.uri());
    adapter
        .generate(&test_request(), Some("ds-key"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_grok_endpoint_and_model() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(serde_json::json!({ "model": "grok-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("reply")))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = GrokAdapter::with_base_url(reqwest::Client::new(), server.uri());
    adapter
        .generate(&test_request(), Some("grok-key"))
        .await
        .unwrap();
}

// ============================================================================
// Gemini
// ============================================================================

#[tokio::test]
async fn test_gemini_authenticates_via_query_param() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-pro:generateContent"))
        .and(query_param("key", "gemini-key"))
        .and(body_partial_json(serde_json::json!({
            "generationConfig": { "temperature": 0.7, "maxOutputTokens": 1000 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "gemini reply" }] }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = GeminiAdapter::with_base_url(reqwest::Client::new(), server.uri());
    let raw = adapter
        .generate(&test_request(), Some("gemini-key"))
        .await
        .unwrap();
    assert_eq!(raw, "gemini reply");
}

// ============================================================================
// Anthropic
// ============================================================================

#[tokio::test]
async fn test_anthropic_sends_api_key_and_version_headers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "anthropic-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(serde_json::json!({
            "model": "claude-3-sonnet-20240229",
            "max_tokens": 1000
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": [{ "type": "text", "text": "anthropic reply" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = AnthropicAdapter::with_base_url(reqwest::Client::new(), server.uri());
    let raw = adapter
        .generate(&test_request(), Some("anthropic-key"))
        .await
        .unwrap();
    assert_eq!(raw, "anthropic reply");
}

// ============================================================================
// Failure paths
// ============================================================================

#[tokio::test]
async fn test_missing_credential_skips_network() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("never")))
        .expect(0)
        .mount(&server)
        .await;

    let adapter = OpenAIAdapter::with_base_url(reqwest::Client::new(), server.uri());
    let err = adapter.generate(&test_request(), None).await.unwrap_err();

    assert!(matches!(err, IdeaError::MissingCredential { .. }));
    assert_eq!(err.to_string(), "OpenAI API key not found");
}

#[tokio::test]
async fn test_unauthorized_surfaces_as_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"error":"invalid api key"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let adapter = OpenAIAdapter::with_base_url(reqwest::Client::new(), server.uri());
    let err = adapter
        .generate(&test_request(), Some("bad-key"))
        .await
        .unwrap_err();

    assert!(matches!(err, IdeaError::Network { .. }));
    assert!(err.to_string().contains("OpenAI API error"));
    assert!(err.to_string().contains("HTTP 401"));
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = AnthropicAdapter::with_base_url(reqwest::Client::new(), server.uri());
    let err = adapter
        .generate(&test_request(), Some("anthropic-key"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("HTTP 500"));
}

#[tokio::test]
async fn test_empty_envelope_is_a_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })),
        )
        .mount(&server)
        .await;

    let adapter = OpenAIAdapter::with_base_url(reqwest::Client::new(), server.uri());
    let err = adapter
        .generate(&test_request(), Some("test-key"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("no choices"));
}
