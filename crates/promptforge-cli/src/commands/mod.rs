//! Command implementations.

pub mod refine;
pub mod registry;
pub mod remix;

use anyhow::{Context, Result};
use std::io::Read;

/// Reads the prompt text from a file path or, when none is given, stdin.
pub fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read prompt file: {path}")),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read prompt from stdin")?;
            Ok(buf)
        }
    }
}

/// Resolves the seed: the explicit flag, or a fresh random seed (reported
/// in the output so a run can be replayed).
pub fn resolve_seed(seed: Option<u32>) -> u32 {
    seed.unwrap_or_else(rand::random)
}
