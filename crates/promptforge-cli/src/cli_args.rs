//! CLI argument definitions.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined
//! here, keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// PromptForge - Deterministic Music-Prompt Refinement
#[derive(Parser)]
#[command(name = "promptforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Regenerate a single prompt field deterministically
    Remix {
        /// Path to the prompt file (default: stdin)
        #[arg(short, long)]
        input: Option<String>,

        /// Field to regenerate
        #[arg(short, long, value_parser = ["genre", "mood", "style-tags", "instruments", "recording"])]
        field: String,

        /// RNG seed (default: random)
        #[arg(long)]
        seed: Option<u32>,

        /// Target genre slot count for genre remix (clamped to 1-4)
        #[arg(long)]
        genre_count: Option<i32>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Run a style-only refinement with an explicit change-set
    Refine {
        /// Path to the prompt file (default: stdin)
        #[arg(short, long)]
        input: Option<String>,

        /// RNG seed (default: random)
        #[arg(long)]
        seed: Option<u32>,

        /// Regenerate the genre field
        #[arg(long)]
        genre: bool,

        /// Target genre slot count (implies --genre, clamped to 1-4)
        #[arg(long)]
        genre_count: Option<i32>,

        /// Regenerate the mood field
        #[arg(long)]
        mood: bool,

        /// Regenerate the style-tags field
        #[arg(long)]
        style_tags: bool,

        /// Regenerate the instruments field
        #[arg(long)]
        instruments: bool,

        /// Regenerate the recording field
        #[arg(long)]
        recording: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Dump the genre registry and tag pool inventory
    Registry {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}
