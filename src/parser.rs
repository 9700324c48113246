//! Reply normalization for free-form provider output.
//!
//! LLM replies are not contractually structured; this module turns one
//! provider's raw text into zero or more [`IdeaRecord`]s with a cascading
//! strategy that prefers machine-parseable JSON when the model complied
//! with formatting instructions and degrades to layout-driven heuristics
//! otherwise:
//!
//! 1. Structured extraction - decode a bracketed JSON span if one exists
//! 2. Pattern-based text segmentation with labelled-field heuristics
//! 3. Total failure - an empty sequence, never an error
//!
//! The title pattern priority order, the metadata exclusion keywords, and
//! the length thresholds encode observed model output quirks; reordering
//! them changes extraction results on ambiguous input, so they stay as
//! literal constants here.

use crate::logging::log_debug;
use crate::types::{Difficulty, IdeaRecord, MarketSize};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Segments examined per reply: the requested idea count plus slack.
const MAX_SEGMENTS: usize = 4;

/// Segments shorter than this are noise, not ideas.
const MIN_SEGMENT_CHARS: usize = 10;

/// Minimum usable description length.
const MIN_DESCRIPTION_CHARS: usize = 10;

/// First-sentence title fallback is only taken below this length.
const MAX_FALLBACK_TITLE_CHARS: usize = 80;

/// Titles longer than this are truncated to 97 chars plus an ellipsis.
const MAX_TITLE_CHARS: usize = 100;

// Tier 1: greedy single-span bracket/brace matches, newline-spanning.
static JSON_ARRAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\[\s*\{.*\}\s*\]").unwrap());
static JSON_OBJECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

// Tier 2: segment boundaries are numbered items, hyphen bullets, or blank lines.
static SEGMENT_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\d+\.\s*|\n\s*-\s*|\n\n+").unwrap());
static BOLD_MARKERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());

// Title patterns, in fixed priority order: explicit labels first, then a
// leading numbered line, then any short leading line-or-sentence span.
static TITLE_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Title:\s*([^\n.]+)").unwrap());
static NAME_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Name:\s*([^\n.]+)").unwrap());
static NUMBERED_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:\d+\.)?\s*([^\n.]+?)(?:\s*\n|\s*\.\s*\n)").unwrap());
static LEADING_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([^\n.]{3,80})(?:\s*\n|\s*\.)").unwrap());

// A captured "title" containing any of these words is metadata, not a title.
static METADATA_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)market|difficulty|description|small|medium|large|easy|hard").unwrap());

// Title cleanup: leftovers the extraction patterns let through.
static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.?\s*").unwrap());
static LEADING_DOT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\.\s*").unwrap());
static TITLE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^title:\s*").unwrap());
static NAME_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^name:\s*").unwrap());
static IDEA_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^idea\s*\d*:?\s*").unwrap());

// Description and metadata fields.
static DESCRIPTION_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)Description:\s*(.*?)\s*(?:Market\s*Size:|Difficulty:|\z)").unwrap()
});
static MARKET_SIZE_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Market\s*Size:\s*(?:Small|Medium|Large)[.\s]*").unwrap());
static DIFFICULTY_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Difficulty:\s*(?:Easy|Medium|Hard)[.\s]*").unwrap());
static DESCRIPTION_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Description:\s*").unwrap());
static MARKET_SIZE_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Market\s*Size:\s*(Small|Medium|Large)").unwrap());
static DIFFICULTY_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Difficulty:\s*(Easy|Medium|Hard)").unwrap());
static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\s+").unwrap());

/// Reply parser with fallback strategies.
pub struct ResponseParser;

impl ResponseParser {
    /// Parse one provider's raw reply into idea records.
    ///
    /// Never fails: a reply with nothing extractable yields an empty
    /// vector, which the orchestrator reports as a zero-idea success.
    /// The result is a pure function of `(raw, source)` except for the
    /// freshly generated record ids.
    pub fn parse(raw: &str, source: &str) -> Vec<IdeaRecord> {
        log_debug!(
            source = %source,
            content_length = raw.len(),
            "Parsing provider reply"
        );

        if let Some(ideas) = Self::parse_structured(raw, source) {
            log_debug!(
                source = %source,
                count = ideas.len(),
                "Extracted ideas from structured JSON span"
            );
            return ideas;
        }

        let ideas = Self::parse_segments(raw, source);
        log_debug!(
            source = %source,
            count = ideas.len(),
            "Extracted ideas from text segmentation"
        );
        ideas
    }

    // =========================================================================
    // Tier 1: structured extraction
    // =========================================================================

    /// Locate a JSON span and decode it; `None` means fall through to Tier 2
    /// on the original raw text.
    fn parse_structured(raw: &str, source: &str) -> Option<Vec<IdeaRecord>> {
        let span = JSON_ARRAY
            .find(raw)
            .or_else(|| JSON_OBJECT.find(raw))?
            .as_str();

        // Decode failure is swallowed; the next tier handles the text.
        let parsed: Value = serde_json::from_str(span).ok()?;

        match &parsed {
            Value::Array(items) => Some(
                items
                    .iter()
                    .map(|item| Self::structured_idea(item, source))
                    .collect(),
            ),
            Value::Object(_) => Some(vec![Self::structured_idea(&parsed, source)]),
            _ => None,
        }
    }

    /// Map one decoded JSON value to a record with flexible key aliasing.
    fn structured_idea(item: &Value, source: &str) -> IdeaRecord {
        let title = Self::string_field(item, &["title", "name"])
            .unwrap_or_else(|| format!("{source} SaaS Idea"));
        let description = Self::string_field(item, &["description", "summary"]).unwrap_or_default();
        let market_size = Self::string_field(item, &["marketSize", "market_size"])
            .and_then(|s| MarketSize::from_token(&s))
            .unwrap_or_default();
        let difficulty = Self::string_field(item, &["difficulty"])
            .and_then(|s| Difficulty::from_token(&s))
            .unwrap_or_default();

        IdeaRecord::new(title, description, market_size, difficulty, source)
    }

    /// First non-empty string value among the aliased keys.
    fn string_field(item: &Value, keys: &[&str]) -> Option<String> {
        keys.iter()
            .filter_map(|key| item.get(key).and_then(Value::as_str))
            .map(str::trim)
            .find(|s| !s.is_empty())
            .map(ToString::to_string)
    }

    // =========================================================================
    // Tier 2: pattern-based text segmentation
    // =========================================================================

    fn parse_segments(raw: &str, source: &str) -> Vec<IdeaRecord> {
        let segments: Vec<&str> = SEGMENT_SPLIT
            .split(raw)
            .map(str::trim)
            .filter(|s| s.chars().count() >= MIN_SEGMENT_CHARS)
            .collect();

        segments
            .iter()
            .take(MAX_SEGMENTS)
            .enumerate()
            .map(|(index, segment)| Self::segment_idea(segment, source, index + 1))
            .collect()
    }

    /// Build one candidate record from a text segment.
    fn segment_idea(segment: &str, source: &str, position: usize) -> IdeaRecord {
        let cleaned = BOLD_MARKERS.replace_all(segment, "$1").into_owned();

        let title = Self::extract_title(&cleaned, source, position);
        let description = Self::extract_description(&cleaned, &title);

        let market_size = MARKET_SIZE_VALUE
            .captures(&cleaned)
            .and_then(|caps| caps.get(1))
            .and_then(|m| MarketSize::from_token(m.as_str()))
            .unwrap_or_default();
        let difficulty = DIFFICULTY_VALUE
            .captures(&cleaned)
            .and_then(|caps| caps.get(1))
            .and_then(|m| Difficulty::from_token(m.as_str()))
            .unwrap_or_default();

        IdeaRecord::new(title, description, market_size, difficulty, source)
    }

    fn extract_title(cleaned: &str, source: &str, position: usize) -> String {
        let patterns: [&Regex; 4] = [&TITLE_LABEL, &NAME_LABEL, &NUMBERED_TITLE, &LEADING_SPAN];

        let mut title = String::new();
        for pattern in patterns {
            if let Some(candidate) = pattern.captures(cleaned).and_then(|caps| caps.get(1)) {
                if !METADATA_WORDS.is_match(candidate.as_str()) {
                    title = candidate.as_str().trim().to_string();
                    break;
                }
            }
        }

        // No pattern matched cleanly: first sentence if short enough, else
        // a synthesized placeholder.
        if title.is_empty() {
            let first_sentence = SENTENCE_BREAK.splitn(cleaned, 2).next().unwrap_or("");
            if !first_sentence.is_empty()
                && first_sentence.chars().count() < MAX_FALLBACK_TITLE_CHARS
                && !METADATA_WORDS.is_match(first_sentence)
            {
                title = first_sentence.trim().to_string();
            } else {
                title = format!("{source} SaaS Idea {position}");
            }
        }

        Self::clean_title(title)
    }

    /// Strip numbering and label leftovers, then enforce the length cap.
    fn clean_title(title: String) -> String {
        let title = LEADING_NUMBER.replace(&title, "");
        let title = LEADING_DOT.replace(&title, "");
        let title = TITLE_PREFIX.replace(&title, "");
        let title = NAME_PREFIX.replace(&title, "");
        let title = IDEA_PREFIX.replace(&title, "");
        let title = title.trim();

        if title.chars().count() > MAX_TITLE_CHARS {
            let truncated: String = title.chars().take(MAX_TITLE_CHARS - 3).collect();
            format!("{truncated}...")
        } else {
            title.to_string()
        }
    }

    fn extract_description(cleaned: &str, title: &str) -> String {
        // Explicit "Description:" label, running until the next metadata
        // label or the end of the segment.
        if let Some(labelled) = DESCRIPTION_LABEL.captures(cleaned).and_then(|caps| caps.get(1)) {
            let labelled = labelled.as_str().trim();
            if labelled.chars().count() > MIN_DESCRIPTION_CHARS {
                return labelled.to_string();
            }
        }

        // Text after the located title, minus any labelled metadata spans.
        if let Some(title_index) = cleaned.find(title) {
            let after_title = cleaned[title_index + title.len()..].trim();
            let remainder = MARKET_SIZE_SPAN.replace_all(after_title, "");
            let remainder = DIFFICULTY_SPAN.replace_all(&remainder, "");
            let remainder = DESCRIPTION_PREFIX.replace_all(&remainder, "");
            let remainder = remainder.trim();
            if remainder.chars().count() > MIN_DESCRIPTION_CHARS {
                return remainder.to_string();
            }
        }

        // Everything after the first line, joined back together.
        let lines: Vec<&str> = cleaned.split('\n').filter(|l| !l.is_empty()).collect();
        if lines.len() > 1 {
            return lines[1..].join("\n").trim().to_string();
        }

        format!("A SaaS idea for the {title} concept.")
    }
}
