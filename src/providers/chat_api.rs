//! Shared chat-completions API structures and plumbing.
//!
//! OpenAI, Perplexity, DeepSeek, and Grok all speak the same
//! `chat/completions` request/response shape with bearer-token auth; only
//! the endpoint, model name, and prompt split differ. The adapters for
//! those providers build a [`ChatRequest`] and hand it to
//! [`execute_chat_request`], which owns status handling and envelope
//! extraction.

use crate::error::{IdeaError, IdeaResult};
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};

/// Chat-completions message structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat-completions request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    pub max_tokens: u32,
}

/// Chat-completions response envelope.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

/// Choice in a chat-completions response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatChoice {
    pub message: ChatResponseMessage,
}

/// Message in a chat-completions response choice.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatResponseMessage {
    #[serde(default)]
    pub content: String,
}

/// POST a chat-completions request with bearer auth and extract the
/// assistant text from the reply envelope.
pub(crate) async fn execute_chat_request(
    http: &reqwest::Client,
    display_name: &str,
    url: &str,
    api_key: &str,
    request: &ChatRequest,
) -> IdeaResult<String> {
    log_debug!(
        provider = %display_name,
        url = %url,
        model = %request.model,
        "Sending chat completion request"
    );

    let response = http
        .post(url)
        .bearer_auth(api_key)
        .json(request)
        .send()
        .await
        .map_err(|e| IdeaError::network(display_name, e.to_string(), Some(Box::new(e))))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(IdeaError::network(
            display_name,
            format!("HTTP {}: {}", status.as_u16(), body.trim()),
            None,
        ));
    }

    let envelope: ChatResponse = response
        .json()
        .await
        .map_err(|e| IdeaError::network(display_name, e.to_string(), Some(Box::new(e))))?;

    envelope
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| IdeaError::network(display_name, "response contained no choices", None))
}
