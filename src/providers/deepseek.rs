//! DeepSeek provider adapter.
//!
//! Chat-completions wire format with bearer-token auth.

use super::chat_api::{execute_chat_request, ChatMessage, ChatRequest};
use super::prompt::{user_prompt_with_format, SHORT_SYSTEM_PROMPT};
use super::{require_api_key, IdeaProvider};
use crate::error::IdeaResult;
use crate::types::GenerationRequest;

const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";
const MODEL: &str = "deepseek-chat";
const MAX_TOKENS: u32 = 1000;

/// DeepSeek adapter
#[derive(Debug, Clone)]
pub struct DeepSeekAdapter {
    http: reqwest::Client,
    base_url: String,
}

impl DeepSeekAdapter {
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
impl IdeaProvider for DeepSeekAdapter {
    fn provider_id(&self) -> &'static str {
        "deepseek"
    }

    fn display_name(&self) -> &'static str {
        "DeepSeek"
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
                ChatMessage::system(SHORT_SYSTEM_PROMPT),
                ChatMessage::user(user_prompt_with_format(request)),
            ],
            temperature: None,
            max_tokens: MAX_TOKENS,
        };

        let url = format!("{}/v1/chat/completions", self.base_url);
        execute_chat_request(&self.http, self.display_name(), &url, api_key, &body).await
    }
}
