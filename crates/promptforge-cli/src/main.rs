//! PromptForge CLI - deterministic music-prompt refinement from the
//! command line.

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use promptforge_cli::cli_args::{Cli, Commands};
use promptforge_cli::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Remix {
            input,
            field,
            seed,
            genre_count,
            json,
        } => commands::remix::run(input.as_deref(), &field, seed, genre_count, json),
        Commands::Refine {
            input,
            seed,
            genre,
            genre_count,
            mood,
            style_tags,
            instruments,
            recording,
            json,
        } => commands::refine::run(
            input.as_deref(),
            seed,
            genre,
            genre_count,
            mood,
            style_tags,
            instruments,
            recording,
            json,
        ),
        Commands::Registry { json } => commands::registry::run(json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
