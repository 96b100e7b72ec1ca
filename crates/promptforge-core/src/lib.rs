//! PromptForge Core - Deterministic Music-Prompt Refinement
//!
//! This crate implements the deterministic prompt refinement and style-tag
//! assembly engine behind the PromptForge authoring tool: pure,
//! seeded-random functions that parse genre/mood/instrument/style-tag
//! fields out of a semi-structured text prompt and regenerate a subset of
//! them according to weighted, genre-aware selection rules, preserving
//! everything else byte-for-byte. No language model is involved in the
//! style path; lyrics and story-mode calls go through an explicit
//! collaborator trait.
//!
//! # Determinism
//!
//! All selection is driven by PCG32 generators threaded explicitly through
//! every sampling function (seeds derived via BLAKE3 where independent
//! streams are needed). Given the same seed and input, every operation
//! produces identical output across runs and platforms.
//!
//! # Module Structure
//!
//! - [`rng`]: PCG32 construction and seed derivation
//! - [`genre`]: canonical genre registry with weight vectors
//! - [`pools`]: static tag vocabularies per domain
//! - [`select`]: weighted, genre-aware tag selection
//! - [`prompt`]: prompt dialects and field parsing/rewriting
//! - [`remix`]: field-scoped regeneration strategies
//! - [`refine`]: the refinement router and collaborator contracts
//!
//! # Example
//!
//! ```
//! use promptforge_core::remix::remix_mood;
//! use promptforge_core::rng::create_rng;
//!
//! let prompt = "Genre: jazz\nBPM: 110\nMood: smoky";
//! let mut rng = create_rng(42);
//! let out = remix_mood(prompt, &mut rng);
//! assert!(out.starts_with("Genre: jazz\nBPM: 110\nMood: "));
//! ```

pub mod error;
pub mod genre;
pub mod pools;
pub mod prompt;
pub mod refine;
pub mod remix;
pub mod rng;
pub mod select;

// Re-export main types at crate root
pub use error::{RefineError, RefineResult};
pub use refine::{
    refine, Capabilities, GenerationResult, LlmClient, LlmError, LlmRequest, LocalLlmStatus,
    RefinementMode, RefinementRequest, StyleChanges,
};

/// Crate version for engine identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
