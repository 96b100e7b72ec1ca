//! `promptforge refine` - style-only refinement with an explicit
//! change-set and decision trace.

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use promptforge_core::{
    refine, Capabilities, LlmClient, LlmError, LlmRequest, RefinementMode, RefinementRequest,
    StyleChanges,
};

use super::{read_input, resolve_seed};

/// The CLI never issues LLM calls; the router's optional enhancement paths
/// treat this as "LLM unavailable" and degrade silently.
struct NoLlm;

impl LlmClient for NoLlm {
    fn complete(&self, _request: &LlmRequest) -> Result<String, LlmError> {
        Err(LlmError("LLM calls are not available from the CLI".to_string()))
    }
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    input: Option<&str>,
    seed: Option<u32>,
    genre: bool,
    genre_count: Option<i32>,
    mood: bool,
    style_tags: bool,
    instruments: bool,
    recording: bool,
    json: bool,
) -> Result<()> {
    let text = read_input(input)?;
    let seed = resolve_seed(seed);

    let any_flag = genre || genre_count.is_some() || mood || style_tags || instruments || recording;
    let changes = any_flag.then_some(StyleChanges {
        genre,
        target_genre_count: genre_count,
        mood,
        style_tags,
        instruments,
        recording,
    });

    let request = RefinementRequest {
        prompt: text,
        title: String::new(),
        feedback: None,
        lyrics: None,
        locked_phrase: None,
        lyrics_topic: None,
        direct_styles: None,
        style_changes: changes,
        mode_hint: Some(RefinementMode::Style),
    };

    let result = refine(&request, &Capabilities::default(), &NoLlm, None, seed)?;

    if json {
        let report = json!({
            "seed": seed,
            "prompt": result.prompt,
            "trace": result.trace,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    eprintln!("{} refined style (seed {})", "ok:".green().bold(), seed);
    if let Some(trace) = &result.trace {
        for record in trace {
            let branch = if record.branch == "regenerate" {
                record.branch.green()
            } else {
                record.branch.dimmed()
            };
            eprintln!("  {:<12} {} ({})", record.key, branch, record.rationale);
        }
    }
    print!("{}", result.prompt);
    Ok(())
}
