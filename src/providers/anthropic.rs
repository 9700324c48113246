//! Anthropic provider adapter.
//!
//! Anthropic's native messages API: auth via the `x-api-key` header plus a
//! pinned `anthropic-version`, a user-only message list, and the assistant
//! text under `content[0].text`.

use super::prompt::user_prompt_with_format;
use super::{require_api_key, IdeaProvider};
use crate::error::{IdeaError, IdeaResult};
use crate::logging::log_debug;
use crate::types::GenerationRequest;
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const MODEL: &str = "claude-3-sonnet-20240229";
const MAX_TOKENS: u32 = 1000;
const API_VERSION: &str = "2023-06-01";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<AnthropicMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AnthropicMessage {
    role: String,
    content: String,
}

#[derive(Debug, Clone, Deserialize)]
struct AnthropicResponse {
    #[serde(default)]
    content: Vec<AnthropicContentBlock>,
}

#[derive(Debug, Clone, Deserialize)]
struct AnthropicContentBlock {
    #[serde(default)]
    text: String,
}

/// Anthropic adapter
#[derive(Debug, Clone)]
pub struct AnthropicAdapter {
    http: reqwest::Client,
    base_url: String,
}

impl AnthropicAdapter {
    pub fn new(http: reqwest::Client) -> Self {
        Self::with_base_url(http, DEFAULT_BASE_URL)
    }

    /// Point the adapter at an alternate endpoint (mock servers in tests).
    pub fn with_base_url(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait::async_trait]
impl IdeaProvider for AnthropicAdapter {
    fn provider_id(&self) -> &'static str {
        "anthropic"
    }

    fn display_name(&self) -> &'static str {
        "Anthropic"
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
        api_key: Option<&str>,
    ) -> IdeaResult<String> {
        let api_key = require_api_key(api_key, self.display_name())?;

        let body = AnthropicRequest {
            model: MODEL.to_string(),
            max_tokens: MAX_TOKENS,
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: user_prompt_with_format(request),
            }],
        };

        let url = format!("{}/v1/messages", self.base_url);
        log_debug!(provider = "Anthropic", url = %url, "Sending messages request");

        let response = self
            .http
            .post(&url)
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| IdeaError::network(self.display_name(), e.to_string(), Some(Box::new(e))))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IdeaError::network(
                self.display_name(),
                format!("HTTP {}: {}", status.as_u16(), body.trim()),
                None,
            ));
        }

        let envelope: AnthropicResponse = response.json().await.map_err(|e| {
            IdeaError::network(self.display_name(), e.to_string(), Some(Box::new(e)))
        })?;

        envelope
            .content
            .into_iter()
            .next()
            .map(|block| block.text)
            .ok_or_else(|| {
                IdeaError::network(self.display_name(), "response contained no content", None)
            })
    }
}
