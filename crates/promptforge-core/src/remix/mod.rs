//! Field-scoped remix strategies.
//!
//! Each strategy is a pure `(text, rng) -> text` transform that regenerates
//! exactly one named field. Shared invariants: lines not belonging to the
//! targeted field are byte-identical before and after, a prompt lacking the
//! target field is returned unchanged, and no strategy ever inserts a field
//! that did not exist.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_pcg::Pcg32;
use std::collections::HashSet;

use crate::genre::{self, MAX_GENRE_SLOTS};
use crate::pools::{ARTICULATIONS, MOODS};
use crate::prompt::{self, Dialect, Field};
use crate::select;

/// Probability of prefixing an instrument with an articulation word.
const ARTICULATION_CHANCE: f64 = 0.3;

/// Regenerates the genre field with `target_count` distinct registry
/// genres.
///
/// The clamp semantics are a deliberate product limit: values `<= 0`
/// collapse to 1, values above [`MAX_GENRE_SLOTS`] collapse to
/// [`MAX_GENRE_SLOTS`]. When no target is given the existing raw
/// (pre-canonicalization) slot count is preserved exactly.
pub fn remix_genre(text: &str, target_count: Option<i32>, rng: &mut Pcg32) -> String {
    let dialect = Dialect::detect(text);
    if prompt::field_value(text, Field::Genre, dialect).is_none() {
        return text.to_string();
    }

    let effective = match target_count {
        Some(k) if k <= 0 => 1,
        Some(k) if k > MAX_GENRE_SLOTS as i32 => MAX_GENRE_SLOTS,
        Some(k) => k as usize,
        None => prompt::raw_genre_count(text, dialect),
    };

    let mut keys = genre::all_keys();
    keys.shuffle(rng);
    keys.truncate(effective);

    prompt::replace_field(text, Field::Genre, &keys.join(", "), dialect)
}

/// Regenerates the mood field with 2-3 descriptors (count randomized per
/// call), drawn from the genre's default moods plus the global pool and
/// excluding the descriptors currently present.
pub fn remix_mood(text: &str, rng: &mut Pcg32) -> String {
    let dialect = Dialect::detect(text);
    let Some(current) = prompt::field_value(text, Field::Mood, dialect) else {
        return text.to_string();
    };

    let existing: HashSet<String> = current
        .split(',')
        .map(|t| t.trim().to_ascii_lowercase())
        .collect();

    let count = 2 + rng.gen_range(0..2);
    let info = genre::info_or_default(prompt::extract_genre(text, dialect));

    let mut candidates: Vec<&str> = Vec::new();
    let mut seen = HashSet::new();
    for mood in info.moods.iter().chain(MOODS.iter()) {
        if seen.insert(*mood) && !existing.contains(&mood.to_ascii_lowercase()) {
            candidates.push(mood);
        }
    }
    candidates.shuffle(rng);
    candidates.truncate(count);

    prompt::replace_field(text, Field::Mood, &candidates.join(", "), dialect)
}

/// Regenerates the style-tags field for the prompt's effective genre,
/// blending electronic and organic texture pools by the genre's electronic
/// ratio and sampling the weighted domains per its weight vector.
pub fn remix_style_tags(text: &str, rng: &mut Pcg32) -> String {
    let dialect = Dialect::detect(text);
    if prompt::field_value(text, Field::StyleTags, dialect).is_none() {
        return text.to_string();
    }

    let genre_key = prompt::extract_genre(text, dialect);
    let base = 4 + rng.gen_range(0..3);
    let tags = select::assemble_style_tags(genre_key, base, rng);

    prompt::replace_field(text, Field::StyleTags, &tags.join(", "), dialect)
}

/// Regenerates the recording field via the structured genre-aware
/// selector. The genre hint is passed only when the prompt actually
/// carries a genre field.
pub fn remix_recording(text: &str, rng: &mut Pcg32) -> String {
    let dialect = Dialect::detect(text);
    if prompt::field_value(text, Field::Recording, dialect).is_none() {
        return text.to_string();
    }

    let genre_hint = prompt::field_value(text, Field::Genre, dialect)
        .map(|_| prompt::extract_genre(text, dialect));
    let count = 2 + rng.gen_range(0..2);
    let context = select::select_recording_context(genre_hint, count, rng);

    prompt::replace_field(text, Field::Recording, &context.join(", "), dialect)
}

/// Rewrites the instruments field with a list appropriate to the genre.
///
/// Instrument mentions already recognized from the registry vocabulary are
/// kept as the hint; the list is topped up from the genre's default
/// suggestions, then each entry is probabilistically embellished with an
/// articulation word.
pub fn remix_instruments(text: &str, rng: &mut Pcg32) -> String {
    let dialect = Dialect::detect(text);
    let Some(current) = prompt::field_value(text, Field::Instruments, dialect) else {
        return text.to_string();
    };

    let info = genre::info_or_default(prompt::extract_genre(text, dialect));

    let vocabulary: HashSet<String> = genre::GENRES
        .iter()
        .flat_map(|g| g.instruments.iter())
        .map(|i| i.to_ascii_lowercase())
        .collect();

    let recognized: Vec<String> = current
        .split(',')
        .map(|t| t.trim().to_ascii_lowercase())
        .filter(|t| vocabulary.contains(t))
        .collect();

    let count = 3 + rng.gen_range(0..2);

    let mut list: Vec<String> = Vec::new();
    for inst in recognized {
        if !list.contains(&inst) {
            list.push(inst);
        }
    }

    let mut defaults: Vec<&str> = info.instruments.to_vec();
    defaults.shuffle(rng);
    for inst in defaults {
        if list.len() >= count {
            break;
        }
        let inst = inst.to_ascii_lowercase();
        if !list.contains(&inst) {
            list.push(inst);
        }
    }
    list.truncate(count);

    for inst in &mut list {
        if rng.gen::<f64>() < ARTICULATION_CHANCE {
            if let Some(word) = ARTICULATIONS.choose(rng) {
                *inst = format!("{word} {inst}");
            }
        }
    }

    prompt::replace_field(text, Field::Instruments, &list.join(", "), dialect)
}
