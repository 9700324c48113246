//! Provider adapter implementations.
//!
//! One adapter per supported LLM service:
//!
//! - **openai**, **perplexity**, **deepseek**, **grok**: bearer-token
//!   `chat/completions` providers built on the shared `chat_api` structures
//! - **gemini**: query-parameter auth with the `generateContent` envelope
//! - **anthropic**: `x-api-key` auth with the native messages API
//!
//! ## Architecture
//!
//! ```text
//! chat_api.rs   <- Shared chat-completions structures and POST helper
//!     |         |          |          |
//! openai.rs  perplexity.rs  deepseek.rs  grok.rs
//!
//! gemini.rs     <- Google generateContent wire format
//! anthropic.rs  <- Anthropic native messages format
//! ```
//!
//! Each adapter converts a [`GenerationRequest`] into its provider's HTTP
//! call and returns the raw assistant text; parsing into idea records is
//! the orchestrator's concern. Adding a provider means adding one adapter
//! and registering it in [`ProviderSet::all`].

use crate::error::{IdeaError, IdeaResult};
use crate::types::GenerationRequest;
use std::sync::Arc;

pub mod anthropic;
pub mod chat_api;
pub mod deepseek;
pub mod gemini;
pub mod grok;
pub mod openai;
pub mod perplexity;
pub(crate) mod prompt;

// Re-export the adapter structs
pub use anthropic::AnthropicAdapter;
pub use deepseek::DeepSeekAdapter;
pub use gemini::GeminiAdapter;
pub use grok::GrokAdapter;
pub use openai::OpenAIAdapter;
pub use perplexity::PerplexityAdapter;

/// Capability implemented by every provider adapter.
///
/// `generate` issues one HTTP call with the provider's auth convention and
/// payload shape and returns the raw assistant text extracted from its
/// response envelope. A missing credential fails immediately without any
/// network activity.
#[async_trait::async_trait]
pub trait IdeaProvider: Send + Sync {
    /// Stable lowercase id used by callers and the credential store.
    fn provider_id(&self) -> &'static str;

    /// Human-readable name carried on records and results.
    fn display_name(&self) -> &'static str;

    /// Dispatch one generation request and return the raw reply text.
    async fn generate(
        &self,
        request: &GenerationRequest,
        api_key: Option<&str>,
    ) -> IdeaResult<String>;
}

/// Require a configured credential before touching the network.
pub(crate) fn require_api_key<'a>(
    api_key: Option<&'a str>,
    display_name: &str,
) -> IdeaResult<&'a str> {
    match api_key {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(IdeaError::missing_credential(display_name)),
    }
}

/// Registry mapping provider ids to adapter instances.
#[derive(Clone)]
pub struct ProviderSet {
    providers: Vec<Arc<dyn IdeaProvider>>,
}

impl ProviderSet {
    /// Registry over an explicit adapter list (test seam).
    pub fn new(providers: Vec<Arc<dyn IdeaProvider>>) -> Self {
        Self { providers }
    }

    /// All six supported providers on their production endpoints, sharing
    /// one HTTP client.
    pub fn all(http: reqwest::Client) -> Self {
        Self::new(vec![
            Arc::new(OpenAIAdapter::new(http.clone())),
            Arc::new(GeminiAdapter::new(http.clone())),
            Arc::new(AnthropicAdapter::new(http.clone())),
            Arc::new(PerplexityAdapter::new(http.clone())),
            Arc::new(DeepSeekAdapter::new(http.clone())),
            Arc::new(GrokAdapter::new(http)),
        ])
    }

    /// Look up an adapter by provider id.
    pub fn get(&self, provider_id: &str) -> Option<&Arc<dyn IdeaProvider>> {
        self.providers
            .iter()
            .find(|p| p.provider_id() == provider_id)
    }

    /// The registered provider ids, in registration order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.provider_id()).collect()
    }
}
