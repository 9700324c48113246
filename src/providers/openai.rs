//! OpenAI provider adapter.
//!
//! Uses the shared chat-completions structures with bearer-token auth.
//! OpenAI carries the full formatting instruction in its system prompt, so
//! the user prompt stays bare.

use super::chat_api::{execute_chat_request, ChatMessage, ChatRequest};
use super::prompt::{user_prompt, GENERATOR_SYSTEM_PROMPT};
use super::{require_api_key, IdeaProvider};
use crate::error::IdeaResult;
use crate::types::GenerationRequest;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const MODEL: &str = "gpt-3.5-turbo";
const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 1000;

/// OpenAI adapter
#[derive(Debug, Clone)]
pub struct OpenAIAdapter {
    http: reqwest::Client,
    base_url: String,
}

impl OpenAIAdapter {
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
impl IdeaProvider for OpenAIAdapter {
    fn provider_id(&self) -> &'static str {
        "openai"
    }

    fn display_name(&self) -> &'static str {
        "OpenAI"
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
        api_key: Option<&str>,
    ) -> IdeaResult<String> {
        let api_key = require_api_key(api_key, self.display_name())?;

        let body = ChatRequest {
            model: MODEL.to_string(),
            messages: vec![
                ChatMessage::system(GENERATOR_SYSTEM_PROMPT),
                ChatMessage::user(user_prompt(request)),
            ],
            temperature: Some(TEMPERATURE),
            max_tokens: MAX_TOKENS,
        };

        let url = format!("{}/v1/chat/completions", self.base_url);
        execute_chat_request(&self.http, self.display_name(), &url, api_key, &body).await
    }
}
