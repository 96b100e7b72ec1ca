//! `promptforge remix` - regenerate a single prompt field.

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use promptforge_core::remix;
use promptforge_core::rng::create_component_rng;

use super::{read_input, resolve_seed};

pub fn run(
    input: Option<&str>,
    field: &str,
    seed: Option<u32>,
    genre_count: Option<i32>,
    json: bool,
) -> Result<()> {
    let text = read_input(input)?;
    let seed = resolve_seed(seed);
    // Same stream the refine router derives for this field, so a remix of
    // one field and a refine touching it agree under the same seed.
    let mut rng = create_component_rng(seed, field);

    let output = match field {
        "genre" => remix::remix_genre(&text, genre_count, &mut rng),
        "mood" => remix::remix_mood(&text, &mut rng),
        "style-tags" => remix::remix_style_tags(&text, &mut rng),
        "instruments" => remix::remix_instruments(&text, &mut rng),
        "recording" => remix::remix_recording(&text, &mut rng),
        other => anyhow::bail!("unknown field: {other}"),
    };

    if json {
        let report = json!({
            "field": field,
            "seed": seed,
            "changed": output != text,
            "prompt": output,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if output == text {
        eprintln!(
            "{} prompt has no {} field; returned unchanged",
            "note:".yellow().bold(),
            field
        );
    } else {
        eprintln!("{} remixed {} (seed {})", "ok:".green().bold(), field, seed);
    }
    print!("{output}");
    Ok(())
}
