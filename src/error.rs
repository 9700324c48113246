//! Error types for idea generation.
//!
//! This module provides structured error handling for the generation
//! pipeline. Every failure at the provider boundary maps onto one of the
//! [`IdeaError`] variants, and the orchestrator converts each of them into
//! a human-readable `ProviderResult::error` string rather than letting it
//! escape the batch.
//!
//! # Error Types
//!
//! - Missing credential (no API key configured for the provider)
//! - Rate limiting (per-provider call budget exhausted)
//! - Network failures (transport errors and non-2xx responses)
//! - Unknown provider ids
//!
//! The `Display` impls double as the user-facing messages; collaborators
//! render them verbatim next to the provider name.

use crate::logging::{log_error, log_warn};
use thiserror::Error;

/// High-level categorization of errors for routing and handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller can fix this (configure a key, use a known provider id).
    Client,
    /// The provider or network had an issue.
    External,
    /// Temporary condition that clears on its own (rate windows).
    Transient,
}

/// Convenient result type for idea generation operations.
pub type IdeaResult<T> = std::result::Result<T, IdeaError>;

/// Errors that can occur while dispatching a generation request.
///
/// Each variant carries the display name of the provider it concerns so
/// that a batch with several failures stays attributable per source.
///
/// # Creating Errors
///
/// Use the constructor methods which automatically log the error:
///
/// ```rust
/// use ideaforge::IdeaError;
///
/// let err = IdeaError::missing_credential("OpenAI");
/// let err = IdeaError::rate_limited("Gemini");
/// ```
#[derive(Error, Debug)]
pub enum IdeaError {
    /// No API key is configured for this provider.
    ///
    /// Checked before any network call is made.
    #[error("{provider} API key not found")]
    MissingCredential {
        /// Display name of the provider.
        provider: String,
    },

    /// The per-provider call budget for the current window is exhausted.
    ///
    /// Rejection is immediate and synchronous; no network call is made
    /// and the window state is left untouched.
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited {
        /// Display name of the provider.
        provider: String,
    },

    /// The HTTP call to the provider failed.
    ///
    /// Covers transport errors, non-2xx statuses, and responses whose
    /// envelope did not contain the expected text. There is no automatic
    /// retry; the failure surfaces once in the batch result.
    #[error("{provider} API error: {message}")]
    Network {
        /// Display name of the provider.
        provider: String,
        /// Description of the underlying failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The requested provider id is not in the known set.
    #[error("Unknown service: {provider}")]
    UnknownProvider {
        /// The unrecognized provider id as supplied by the caller.
        provider: String,
    },
}

impl IdeaError {
    /// Get the error category for routing and handling decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingCredential { .. } => ErrorCategory::Client,
            Self::RateLimited { .. } => ErrorCategory::Transient,
            Self::Network { .. } => ErrorCategory::External,
            Self::UnknownProvider { .. } => ErrorCategory::Client,
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================
    //
    // These methods automatically log the error at the appropriate level.
    // Use them instead of constructing variants directly.

    /// Create a missing credential error (logs at WARN level).
    pub fn missing_credential(provider: impl Into<String>) -> Self {
        let provider = provider.into();
        log_warn!(
            provider = %provider,
            error_type = "missing_credential",
            "No API key configured for provider"
        );
        Self::MissingCredential { provider }
    }

    /// Create a rate limited error (logs at WARN level).
    pub fn rate_limited(provider: impl Into<String>) -> Self {
        let provider = provider.into();
        log_warn!(
            provider = %provider,
            error_type = "rate_limited",
            "Provider call rejected by rate limiter"
        );
        Self::RateLimited { provider }
    }

    /// Create a network error (logs at ERROR level).
    pub fn network(
        provider: impl Into<String>,
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let provider = provider.into();
        let message = message.into();
        log_error!(
            provider = %provider,
            error_type = "network",
            message = %message,
            has_source = source.is_some(),
            "Provider request failed"
        );
        Self::Network {
            provider,
            message,
            source,
        }
    }

    /// Create an unknown provider error (logs at WARN level).
    pub fn unknown_provider(provider: impl Into<String>) -> Self {
        let provider = provider.into();
        log_warn!(
            provider = %provider,
            error_type = "unknown_provider",
            "Unrecognized provider id requested"
        );
        Self::UnknownProvider { provider }
    }
}
