//! LLM collaborator boundary.
//!
//! The engine never talks to a model directly; it builds single-shot
//! completion requests and hands them to an [`LlmClient`] implemented
//! outside the core. Any client error means "LLM unavailable for this
//! call" and is handled by the router per path: mandatory lyrics calls
//! surface it, optional enhancements swallow it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default per-call timeout hint, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// A single-shot text completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub timeout_ms: u64,
}

/// Failure of one LLM call (timeout, network, provider error).
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct LlmError(pub String);

/// External single-shot completion collaborator.
pub trait LlmClient {
    fn complete(&self, request: &LlmRequest) -> Result<String, LlmError>;
}

/// Result of probing a local model endpoint, produced by an external
/// availability check before any offline-mode lyrics call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalLlmStatus {
    pub available: bool,
    pub has_required_model: bool,
}

const LYRICS_SYSTEM_PROMPT: &str = "You are a songwriter. Revise or write song lyrics to match \
the requested genre and mood. Return only the lyrics, with section markers like [Verse] and \
[Chorus].";

const STORY_SYSTEM_PROMPT: &str = "You are a music producer describing a track. Rewrite the \
given field list as one flowing narrative paragraph, preserving every musical detail.";

/// Builds the request revising existing lyrics against feedback.
pub(crate) fn lyrics_refine_request(
    existing: &str,
    feedback: &str,
    genre: &str,
    mood: Option<&str>,
    topic: Option<&str>,
    locked_phrase: Option<&str>,
) -> LlmRequest {
    let mut user = format!(
        "Revise these lyrics.\n\nLyrics:\n{existing}\n\nFeedback: {feedback}\nGenre: {genre}\n"
    );
    if let Some(mood) = mood {
        user.push_str(&format!("Mood: {mood}\n"));
    }
    if let Some(topic) = topic {
        user.push_str(&format!("Topic: {topic}\n"));
    }
    if let Some(phrase) = locked_phrase {
        user.push_str(&format!("Keep this phrase intact: {phrase}\n"));
    }
    LlmRequest {
        system_prompt: LYRICS_SYSTEM_PROMPT.to_string(),
        user_prompt: user,
        timeout_ms: DEFAULT_TIMEOUT_MS,
    }
}

/// Builds the request bootstrapping lyrics when none exist yet.
pub(crate) fn lyrics_bootstrap_request(
    seed_text: &str,
    genre: &str,
    mood: Option<&str>,
    topic: Option<&str>,
    locked_phrase: Option<&str>,
) -> LlmRequest {
    let mut user = format!("Write new lyrics.\n\nDirection: {seed_text}\nGenre: {genre}\n");
    if let Some(mood) = mood {
        user.push_str(&format!("Mood: {mood}\n"));
    }
    if let Some(topic) = topic {
        user.push_str(&format!("Topic: {topic}\n"));
    }
    if let Some(phrase) = locked_phrase {
        user.push_str(&format!("Include this phrase: {phrase}\n"));
    }
    LlmRequest {
        system_prompt: LYRICS_SYSTEM_PROMPT.to_string(),
        user_prompt: user,
        timeout_ms: DEFAULT_TIMEOUT_MS,
    }
}

/// Builds the story-mode request converting a flat field prompt into
/// narrative prose.
pub(crate) fn story_mode_request(prompt_text: &str) -> LlmRequest {
    LlmRequest {
        system_prompt: STORY_SYSTEM_PROMPT.to_string(),
        user_prompt: prompt_text.to_string(),
        timeout_ms: DEFAULT_TIMEOUT_MS,
    }
}
