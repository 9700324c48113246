//! Prompt assembly for generation requests.
//!
//! The instruction text is part of the wire contract with each provider:
//! the parser's labelled-field heuristics assume replies were asked for in
//! exactly this shape (3 ideas, each with title, description, market size,
//! and difficulty), so the templates here are fixed strings.

use crate::types::GenerationRequest;

/// System prompt for providers that take the full formatting instruction
/// up front (OpenAI).
pub(crate) const GENERATOR_SYSTEM_PROMPT: &str = "You are a business idea generator specialized in SaaS products. Generate 3 innovative SaaS ideas based on the provided parameters. Format your response as a list of ideas with clear titles and descriptions. For each idea, include a title, description, market size (Small/Medium/Large), and difficulty (Easy/Medium/Hard).";

/// Short system prompt for chat providers that get the formatting
/// instruction appended to the user prompt instead.
pub(crate) const SHORT_SYSTEM_PROMPT: &str = "You are a business idea generator specialized in SaaS products. Generate 3 innovative SaaS ideas based on the provided parameters.";

/// Formatting instruction appended to the user prompt for providers whose
/// system prompt does not already carry it.
pub(crate) const FORMAT_INSTRUCTION: &str = "Format your response as a list of 3 ideas. For each idea, include a title, description, market size (Small/Medium/Large), and difficulty (Easy/Medium/Hard).";

/// Interpolate the request parameters into the user prompt.
///
/// Empty `additional_notes` contributes nothing; non-empty notes are
/// appended as an `Additional requirements:` clause.
pub(crate) fn user_prompt(request: &GenerationRequest) -> String {
    let notes_clause = if request.additional_notes.is_empty() {
        String::new()
    } else {
        format!("Additional requirements: {}", request.additional_notes)
    };

    format!(
        "Generate 3 SaaS business ideas for the {} industry, targeting {} market, using {} technology. {}",
        request.industry, request.target_market, request.technologies, notes_clause
    )
}

/// User prompt with the formatting instruction appended.
pub(crate) fn user_prompt_with_format(request: &GenerationRequest) -> String {
    format!("{}\n\n{}", user_prompt(request), FORMAT_INSTRUCTION)
}
