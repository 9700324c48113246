//! Gemini provider adapter.
//!
//! Google's `generateContent` wire format: the API key travels as a `key`
//! query parameter rather than a header, the prompt is a single
//! `contents[].parts[].text` entry, and the assistant text comes back under
//! `candidates[0].content.parts[0].text`.

use super::prompt::user_prompt_with_format;
use super::{require_api_key, IdeaProvider};
use crate::error::{IdeaError, IdeaResult};
use crate::logging::log_debug;
use crate::types::GenerationRequest;
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const MODEL: &str = "gemini-pro";
const TEMPERATURE: f64 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GeminiGenerationConfig {
    temperature: f64,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Clone, Deserialize)]
struct GeminiCandidate {
    content: GeminiContentResponse,
}

#[derive(Debug, Clone, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Debug, Clone, Deserialize)]
struct GeminiPartResponse {
    #[serde(default)]
    text: String,
}

/// Gemini adapter
#[derive(Debug, Clone)]
pub struct GeminiAdapter {
    http: reqwest::Client,
    base_url: String,
}

impl GeminiAdapter {
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
impl IdeaProvider for GeminiAdapter {
    fn provider_id(&self) -> &'static str {
        "gemini"
    }

    fn display_name(&self) -> &'static str {
        "Gemini"
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
        api_key: Option<&str>,
    ) -> IdeaResult<String> {
        let api_key = require_api_key(api_key, self.display_name())?;

        let body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: user_prompt_with_format(request),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, MODEL);
        log_debug!(provider = "Gemini", url = %url, "Sending generateContent request");

        let response = self
            .http
            .post(&url)
            .query(&[("key", api_key)])
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

        let envelope: GeminiResponse = response.json().await.map_err(|e| {
            IdeaError::network(self.display_name(), e.to_string(), Some(Box::new(e)))
        })?;

        envelope
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| {
                IdeaError::network(self.display_name(), "response contained no candidates", None)
            })
    }
}
