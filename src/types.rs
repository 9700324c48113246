//! Core data types for idea generation.
//!
//! Defines the caller-facing request, the normalized [`IdeaRecord`] output
//! unit, and the per-provider [`ProviderResult`] wrapper. Field names on the
//! serialized forms are a stable contract with the display and export
//! collaborators, so the serde casing here must not change.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Immutable input parameters for one generation batch.
///
/// The core invents no defaults: absent optional fields are passed through
/// as empty strings and interpolated as-is into the provider prompts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Industry the ideas should target (e.g. "healthcare").
    pub industry: String,
    /// Target market segment (e.g. "small businesses").
    pub target_market: String,
    /// Technology preference (e.g. "AI and machine learning").
    pub technologies: String,
    /// Optional free-text requirements; empty when the caller supplied none.
    #[serde(default)]
    pub additional_notes: String,
}

/// Estimated market size for an idea.
///
/// Defaults to `Medium` whenever a provider reply carries no parseable
/// market size token.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum MarketSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl MarketSize {
    /// Parse a market size token case-insensitively.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }

    /// The canonical token for this value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

impl std::fmt::Display for MarketSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Implementation difficulty for an idea.
///
/// Defaults to `Medium` whenever a provider reply carries no parseable
/// difficulty token.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse a difficulty token case-insensitively.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    /// The canonical token for this value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized business idea extracted from a provider reply.
///
/// Ids are generated locally and are unique within a generation batch;
/// they carry no cross-session uniqueness guarantee. `is_favorite` is
/// always false at creation - favoriting belongs to the display layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IdeaRecord {
    /// Opaque unique token, never supplied by a provider.
    pub id: String,
    /// Short title, non-empty after parsing.
    pub title: String,
    /// Idea description; may be a synthesized placeholder.
    pub description: String,
    pub market_size: MarketSize,
    pub difficulty: Difficulty,
    pub is_favorite: bool,
    /// Display name of the originating provider.
    pub source: String,
}

impl IdeaRecord {
    /// Create a record with a fresh id and favoriting cleared.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        market_size: MarketSize,
        difficulty: Difficulty,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id: generate_id(),
            title: title.into(),
            description: description.into(),
            market_size,
            difficulty,
            is_favorite: false,
            source: source.into(),
        }
    }
}

/// Outcome of one provider within a generation batch.
///
/// The expected steady state is exactly one of `ideas` non-empty or
/// `error` present, but a provider may also "succeed" with zero
/// extractable ideas, leaving both empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderResult {
    /// Ideas extracted from the reply, in reply order.
    pub ideas: Vec<IdeaRecord>,
    /// Human-readable failure reason, if the provider call failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Display name of the provider this result belongs to.
    pub source: String,
}

impl ProviderResult {
    /// Successful result carrying the parsed ideas.
    pub fn success(ideas: Vec<IdeaRecord>, source: impl Into<String>) -> Self {
        Self {
            ideas,
            error: None,
            source: source.into(),
        }
    }

    /// Failed result with no ideas and a displayable reason.
    pub fn failure(error: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            ideas: Vec::new(),
            error: Some(error.into()),
            source: source.into(),
        }
    }
}

/// Generate an opaque id for a new [`IdeaRecord`].
pub(crate) fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}
