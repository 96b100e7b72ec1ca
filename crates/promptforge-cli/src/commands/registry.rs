//! `promptforge registry` - dump the genre registry and pool inventory.

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use promptforge_core::genre::{GENRES, MAX_GENRE_SLOTS};
use promptforge_core::pools::{self, TagDomain};

pub fn run(json: bool) -> Result<()> {
    if json {
        let genres: Vec<_> = GENRES
            .iter()
            .map(|g| {
                json!({
                    "key": g.key,
                    "bpm": g.bpm,
                    "moods": g.moods,
                    "instruments": g.instruments,
                    "electronic": g.electronic,
                    "weights": {
                        "vocal": g.weights.vocal,
                        "spatial": g.weights.spatial,
                        "harmonic": g.weights.harmonic,
                        "dynamic": g.weights.dynamic,
                        "temporal": g.weights.temporal,
                    },
                })
            })
            .collect();
        let domains: Vec<_> = TagDomain::ALL
            .iter()
            .map(|d| {
                json!({
                    "domain": d.name(),
                    "tags": d.categories().iter().map(|c| c.len()).sum::<usize>(),
                })
            })
            .collect();
        let report = json!({
            "max_genre_slots": MAX_GENRE_SLOTS,
            "genres": genres,
            "domains": domains,
            "curated_recording_genres": pools::recording::CURATED
                .iter()
                .map(|(key, _)| *key)
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Genre registry".bold());
    for g in GENRES {
        println!(
            "  {:<16} {:>3} bpm  electronic {:.2}  vocal {:.2}",
            g.key.cyan(),
            g.bpm,
            g.electronic,
            g.weights.vocal
        );
    }
    println!();
    println!("{}", "Tag domains".bold());
    for domain in TagDomain::ALL {
        let count: usize = domain.categories().iter().map(|c| c.len()).sum();
        println!("  {:<10} {} tags", domain.name().cyan(), count);
    }
    println!();
    println!(
        "{} {}",
        "Curated recording contexts:".bold(),
        pools::recording::CURATED
            .iter()
            .map(|(key, _)| *key)
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(())
}
