//! Error types for the refinement engine.
//!
//! Only the lyrics path raises. Deterministic operations (genre resolution,
//! tag selection, field rewrites) define explicit fallbacks instead of
//! erroring: the default genre, the input text unchanged, or an empty tag
//! set.

use thiserror::Error;

/// Result type for refinement operations.
pub type RefineResult<T> = Result<T, RefineError>;

/// Errors that can occur during a refinement request.
#[derive(Debug, Error)]
pub enum RefineError {
    /// Malformed or missing required input. Surfaced immediately, never
    /// retried.
    #[error("invalid input '{field}': {message}")]
    Validation {
        /// The request field that failed validation.
        field: &'static str,
        /// Error message.
        message: String,
    },

    /// Offline mode is on but the local model endpoint is unreachable.
    /// Fatal for the specific lyrics call only.
    #[error("local LLM endpoint unreachable: {endpoint}")]
    LocalLlmUnavailable {
        /// The configured endpoint.
        endpoint: String,
    },

    /// Offline endpoint reachable but the required model is not installed.
    #[error("required local model not installed: {model}")]
    LocalModelMissing {
        /// The configured model name.
        model: String,
    },

    /// LLM call failed (timeout/network). Only surfaced from the mandatory
    /// lyrics path; optional enhancement paths swallow it.
    #[error("LLM call failed: {0}")]
    Llm(String),
}

impl RefineError {
    /// Creates a validation error.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Stable error code for machine-readable reporting.
    pub fn code(&self) -> &'static str {
        match self {
            RefineError::Validation { .. } => "PROMPT_001",
            RefineError::LocalLlmUnavailable { .. } => "PROMPT_002",
            RefineError::LocalModelMissing { .. } => "PROMPT_003",
            RefineError::Llm(_) => "PROMPT_004",
        }
    }

    /// Error category for grouping in reports.
    pub fn category(&self) -> &'static str {
        match self {
            RefineError::Validation { .. } => "validation",
            _ => "llm",
        }
    }
}
