//! Fan-out of one generation request across selected providers.
//!
//! The [`Orchestrator`] dispatches every selected provider concurrently,
//! waits for all of them to settle, and returns one [`ProviderResult`] per
//! requested id in the caller-supplied order. Failures stay scoped to
//! their provider: an error becomes that entry's `error` string and the
//! rest of the batch proceeds untouched.
//!
//! Per-provider dispatch runs the gates in a fixed order before any
//! network activity: known id, configured credential, rate-limit slot.
//! A call rejected by an earlier gate never reaches a later one.

use crate::credentials::CredentialStore;
use crate::error::IdeaError;
use crate::logging::{log_debug, log_info};
use crate::parser::ResponseParser;
use crate::providers::ProviderSet;
use crate::rate_limit::RateLimiter;
use crate::types::{GenerationRequest, ProviderResult};
use futures_util::future::join_all;
use std::sync::Arc;

/// Coordinates provider adapters, the rate limiter, and reply parsing for
/// one generation batch at a time.
pub struct Orchestrator {
    providers: ProviderSet,
    rate_limiter: RateLimiter,
    credentials: Arc<dyn CredentialStore>,
}

impl Orchestrator {
    /// Orchestrator over all six production providers.
    pub fn new(credentials: Arc<dyn CredentialStore>) -> Self {
        Self::with_providers(ProviderSet::all(reqwest::Client::new()), credentials)
    }

    /// Orchestrator over an explicit provider registry (test seam).
    pub fn with_providers(providers: ProviderSet, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            providers,
            rate_limiter: RateLimiter::new(),
            credentials,
        }
    }

    /// Fan the request out to every id in `provider_ids` concurrently.
    ///
    /// Returns one result per requested id, in the requested order,
    /// regardless of which provider's response arrives first. No entry is
    /// emitted until all dispatched calls have settled.
    pub async fn generate_all(
        &self,
        request: GenerationRequest,
        provider_ids: &[String],
    ) -> Vec<ProviderResult> {
        log_info!(
            providers = provider_ids.len(),
            industry = %request.industry,
            "Dispatching generation batch"
        );

        let dispatches = provider_ids.iter().map(|id| self.dispatch(&request, id));
        let results = join_all(dispatches).await;

        log_info!(
            providers = results.len(),
            failures = results.iter().filter(|r| r.error.is_some()).count(),
            ideas = results.iter().map(|r| r.ideas.len()).sum::<usize>(),
            "Generation batch settled"
        );
        results
    }

    /// Run one provider's gates, network call, and reply parsing.
    async fn dispatch(&self, request: &GenerationRequest, provider_id: &str) -> ProviderResult {
        let Some(adapter) = self.providers.get(provider_id) else {
            let err = IdeaError::unknown_provider(provider_id);
            return ProviderResult::failure(err.to_string(), provider_id);
        };
        let source = adapter.display_name();

        let api_key = self.credentials.get(provider_id).filter(|k| !k.is_empty());
        if api_key.is_none() {
            let err = IdeaError::missing_credential(source);
            return ProviderResult::failure(err.to_string(), source);
        }

        if !self.rate_limiter.try_acquire(provider_id) {
            let err = IdeaError::rate_limited(source);
            return ProviderResult::failure(err.to_string(), source);
        }

        match adapter.generate(request, api_key.as_deref()).await {
            Ok(raw) => {
                let ideas = ResponseParser::parse(&raw, source);
                log_debug!(
                    provider = %source,
                    ideas = ideas.len(),
                    "Provider call succeeded"
                );
                ProviderResult::success(ideas, source)
            }
            Err(err) => ProviderResult::failure(err.to_string(), source),
        }
    }
}
