//! Credential lookup for provider API keys.
//!
//! The core never writes credentials - it only reads them through the
//! [`CredentialStore`] trait, keyed by provider id. The application layer
//! owns persistence; this module ships an in-memory store for tests and
//! programmatic use, and an environment-backed store mirroring the
//! `{PROVIDER}_API_KEY` convention.

use std::collections::HashMap;

/// Read-only source of provider API keys, keyed by provider id.
pub trait CredentialStore: Send + Sync {
    /// Look up the secret for a provider id, if one is configured.
    fn get(&self, provider_id: &str) -> Option<String>;
}

/// In-memory credential store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCredentials {
    keys: HashMap<String, String>,
}

impl InMemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key for a provider id, replacing any existing one.
    pub fn set(&mut self, provider_id: impl Into<String>, api_key: impl Into<String>) {
        self.keys.insert(provider_id.into(), api_key.into());
    }

    /// Builder-style variant of [`set`](Self::set).
    #[must_use]
    pub fn with_key(mut self, provider_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        self.set(provider_id, api_key);
        self
    }
}

impl CredentialStore for InMemoryCredentials {
    fn get(&self, provider_id: &str) -> Option<String> {
        self.keys.get(provider_id).cloned()
    }
}

/// Credential store backed by environment variables.
///
/// Maps a provider id to `{PROVIDER_ID}_API_KEY`, uppercased
/// (e.g. `openai` reads `OPENAI_API_KEY`).
#[derive(Debug, Default, Clone)]
pub struct EnvCredentials;

impl EnvCredentials {
    pub fn new() -> Self {
        Self
    }
}

impl CredentialStore for EnvCredentials {
    fn get(&self, provider_id: &str) -> Option<String> {
        let var = format!("{}_API_KEY", provider_id.to_uppercase());
        std::env::var(var).ok().filter(|key| !key.is_empty())
    }
}
