//! Weighted, genre-aware tag selection.
//!
//! All sampling is driven by an explicit `&mut Pcg32`; no function here
//! reads ambient randomness. Selection never errors: an empty result is a
//! legitimate outcome of the vocal probability gate.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::genre;
use crate::pools::{recording, texture, TagDomain};

/// Probability that a genre hint wins the biased sub-pool choice.
/// Bias, not force: the unbiased branch stays reachable for every seed
/// stream.
const BIAS_STRENGTH: f64 = 0.75;

/// Selects up to `n` distinct tags from one weighted domain.
///
/// Flattens the domain's categories into one candidate list, shuffles it
/// deterministically, and takes the first `min(n, pool)` entries. The vocal
/// domain is probability-gated: one gate draw against the genre's vocal
/// weight decides whether any tags are returned at all.
pub fn select_domain_tags(
    domain: TagDomain,
    genre: &str,
    n: usize,
    rng: &mut Pcg32,
) -> Vec<&'static str> {
    if n == 0 {
        return Vec::new();
    }
    if domain == TagDomain::Vocal {
        let p = genre::weights_for(genre).vocal;
        if rng.gen::<f64>() >= p {
            return Vec::new();
        }
    }

    let mut candidates: Vec<&'static str> = domain
        .categories()
        .iter()
        .flat_map(|cat| cat.iter().copied())
        .collect();
    candidates.shuffle(rng);
    candidates.truncate(n);
    candidates
}

/// Selects `n` texture tags, blending the electronic and organic pools
/// according to the genre's electronic ratio. Each slot draws its pool
/// independently; exhausted pools spill over to the other.
pub fn select_texture_tags(genre: &str, n: usize, rng: &mut Pcg32) -> Vec<&'static str> {
    let ratio = genre::lookup(genre).map(|g| g.electronic).unwrap_or(0.5);

    let mut electronic: Vec<&'static str> = texture::ELECTRONIC.to_vec();
    let mut organic: Vec<&'static str> = texture::ORGANIC.to_vec();
    electronic.shuffle(rng);
    organic.shuffle(rng);

    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let pick = if rng.gen::<f64>() < ratio {
            electronic.pop().or_else(|| organic.pop())
        } else {
            organic.pop().or_else(|| electronic.pop())
        };
        match pick {
            Some(tag) => out.push(tag),
            None => break,
        }
    }
    out
}

/// Assembles a full style-tag set for a genre: `base` texture tags plus at
/// most one tag per weighted domain, sampled per the genre's weight vector.
pub fn assemble_style_tags(genre: &str, base: usize, rng: &mut Pcg32) -> Vec<&'static str> {
    let mut tags = select_texture_tags(genre, base, rng);
    let weights = genre::weights_for(genre);

    for &domain in TagDomain::ALL {
        if domain == TagDomain::Vocal {
            // Gated internally; no second weight draw.
            tags.extend(select_domain_tags(domain, genre, 1, rng));
        } else if rng.gen::<f64>() < domain.weight(&weights) {
            tags.extend(select_domain_tags(domain, genre, 1, rng));
        }
    }

    let mut seen = std::collections::HashSet::new();
    tags.retain(|tag| seen.insert(*tag));
    tags
}

/// Selects a recording context of `count` tags (clamped to 1-4).
///
/// A curated per-genre list takes priority when the genre hint resolves to
/// a registry key with curated entries. Otherwise the structured selector
/// assembles incrementally: exactly one production-quality tag, then an
/// environment, a technique, and a character tag as the count allows, each
/// drawn from its own disjoint sub-pool.
pub fn select_recording_context(
    genre: Option<&str>,
    count: usize,
    rng: &mut Pcg32,
) -> Vec<&'static str> {
    let count = count.clamp(1, 4);

    if let Some(hint) = genre {
        if let Some(curated) = genre::canonical(hint).and_then(recording::curated_for) {
            let mut pool = curated.to_vec();
            pool.shuffle(rng);
            pool.truncate(count);
            return pool;
        }
    }

    let mut out = Vec::with_capacity(count);
    out.push(choose(recording::PRODUCTION_QUALITY, rng));

    if out.len() < count {
        let pool = pick_keyed(recording::ENVIRONMENTS, genre.and_then(environment_bias), rng);
        out.push(choose(pool, rng));
    }
    if out.len() < count {
        let pool = pick_keyed(recording::TECHNIQUES, genre.and_then(technique_bias), rng);
        out.push(choose(pool, rng));
    }
    if out.len() < count {
        out.push(choose(recording::CHARACTER, rng));
    }
    out
}

fn choose(pool: &'static [&'static str], rng: &mut Pcg32) -> &'static str {
    // Pools are non-empty static data; asserted by the pools tests.
    pool.choose(rng).copied().unwrap_or("")
}

/// Picks a keyed sub-pool, honoring a genre-hint bias when one applies and
/// drawing the key uniformly otherwise.
fn pick_keyed(
    pools: &'static [(&'static str, &'static [&'static str])],
    favored: Option<&'static str>,
    rng: &mut Pcg32,
) -> &'static [&'static str] {
    if let Some(key) = favored {
        if rng.gen::<f64>() < BIAS_STRENGTH {
            if let Some((_, pool)) = pools.iter().find(|(k, _)| *k == key) {
                return pool;
            }
        }
    }
    pools.choose(rng).map(|(_, pool)| *pool).unwrap_or(&[])
}

// Substring heuristics on the genre mention, kept as-is from the product's
// established behavior rather than routed through the registry.
fn environment_bias(genre: &str) -> Option<&'static str> {
    let g = genre.to_ascii_lowercase();
    if g.contains("jazz") || g.contains("blues") || g.contains("classical") {
        Some("live")
    } else {
        None
    }
}

fn technique_bias(genre: &str) -> Option<&'static str> {
    let g = genre.to_ascii_lowercase();
    const DIGITAL: &[&str] = &[
        "techno", "house", "trap", "edm", "electronic", "drum and bass", "synthwave", "hip hop",
    ];
    const ANALOG: &[&str] = &["folk", "country", "blues", "soul", "vintage", "acoustic", "lofi"];

    if DIGITAL.iter().any(|kw| g.contains(kw)) {
        Some("digital")
    } else if ANALOG.iter().any(|kw| g.contains(kw)) {
        Some("analog")
    } else {
        None
    }
}
