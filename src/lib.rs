//! # ideaforge
//!
//! Multi-provider SaaS idea generation client with support for OpenAI,
//! Gemini, Anthropic, Perplexity, DeepSeek, and Grok.
//!
//! ## Key Features
//!
//! - **Concurrent fan-out**: one request dispatched to every selected
//!   provider in parallel, with per-provider failure isolation
//! - **Reply normalization**: free-form model output parsed into typed
//!   idea records via a JSON-first heuristic cascade
//! - **Rate limiting**: per-provider fixed-window call budgets
//! - **Pluggable credentials**: read-only key lookup behind a trait
//!
//! ## Example
//!
//! ```rust,no_run
//! use ideaforge::{GenerationRequest, InMemoryCredentials, Orchestrator};
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let credentials = InMemoryCredentials::new().with_key("openai", "sk-your-key");
//! let orchestrator = Orchestrator::new(Arc::new(credentials));
//!
//! let request = GenerationRequest {
//!     industry: "healthcare".to_string(),
//!     target_market: "small clinics".to_string(),
//!     technologies: "AI".to_string(),
//!     additional_notes: String::new(),
//! };
//!
//! let results = orchestrator
//!     .generate_all(request, &["openai".to_string(), "gemini".to_string()])
//!     .await;
//! for result in results {
//!     println!("{}: {} ideas", result.source, result.ideas.len());
//! }
//! # }
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod credentials;
pub mod error;
pub mod orchestrator;
pub mod parser;
pub mod providers;
pub mod rate_limit;
pub mod types;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use credentials::{CredentialStore, EnvCredentials, InMemoryCredentials};
pub use error::{ErrorCategory, IdeaError, IdeaResult};
pub use orchestrator::Orchestrator;
pub use parser::ResponseParser;
pub use providers::{
    AnthropicAdapter, DeepSeekAdapter, GeminiAdapter, GrokAdapter, IdeaProvider, OpenAIAdapter,
    PerplexityAdapter, ProviderSet,
};
pub use rate_limit::RateLimiter;
pub use types::{Difficulty, GenerationRequest, IdeaRecord, MarketSize, ProviderResult};
