//! PromptForge CLI - command-line interface for the deterministic
//! prompt refinement engine.
//!
//! The binary never performs LLM calls: the lyrics and story-mode paths
//! belong to the desktop shell. Everything reachable from here is the pure
//! style path, which is why every command accepts an explicit `--seed`.

pub mod cli_args;
pub mod commands;
