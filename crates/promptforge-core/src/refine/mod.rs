//! Refinement router.
//!
//! Classifies each refinement request into exactly one mode and dispatches
//! to the right combination of deterministic style regeneration and (only
//! when lyrics output is required) a single external LLM call. Direct Mode
//! short-circuits everything else and builds an enriched prompt straight
//! from an explicit style list.
//!
//! The deterministic style path never errors; only lyrics-path
//! precondition violations raise. Optional enhancements (story mode)
//! degrade silently.
//!
//! Each regenerated field samples from its own random stream, derived from
//! the request seed and the field name. Regenerating one field therefore
//! never shifts the draws another field sees under the same seed.

mod llm;
mod trace;

#[cfg(test)]
mod tests;

pub use llm::{LlmClient, LlmError, LlmRequest, LocalLlmStatus, DEFAULT_TIMEOUT_MS};
pub use trace::DecisionRecord;

use serde::{Deserialize, Serialize};

use crate::error::{RefineError, RefineResult};
use crate::genre;
use crate::prompt::{self, Dialect, Field, MAX_MODE_SIGNATURES};
use crate::remix;
use crate::rng::create_component_rng;

/// How a refinement request is to be applied. Derived per request, never
/// stored; an unspecified hint defaults to [`RefinementMode::Combined`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefinementMode {
    Style,
    Lyrics,
    Combined,
}

/// Explicit per-field style change-set. When present, only flagged fields
/// are regenerated and the router emits decision records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleChanges {
    #[serde(default)]
    pub genre: bool,
    #[serde(default)]
    pub target_genre_count: Option<i32>,
    #[serde(default)]
    pub mood: bool,
    #[serde(default)]
    pub style_tags: bool,
    #[serde(default)]
    pub instruments: bool,
    #[serde(default)]
    pub recording: bool,
}

/// Immutable refinement input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefinementRequest {
    pub prompt: String,
    pub title: String,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub lyrics: Option<String>,
    #[serde(default)]
    pub locked_phrase: Option<String>,
    #[serde(default)]
    pub lyrics_topic: Option<String>,
    #[serde(default)]
    pub direct_styles: Option<Vec<String>>,
    #[serde(default)]
    pub style_changes: Option<StyleChanges>,
    #[serde(default)]
    pub mode_hint: Option<RefinementMode>,
}

/// Refinement output. Created fresh per request, never mutated after
/// return; the core persists nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub prompt: String,
    pub title: String,
    pub lyrics: Option<String>,
    pub trace: Option<Vec<DecisionRecord>>,
}

/// Typed capability surface read (never written) by the router. Replaces
/// the source product's runtime existence-probing of config getters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capabilities {
    pub lyrics_mode: bool,
    pub max_mode: bool,
    pub offline_mode: bool,
    pub story_mode: bool,
    pub llm_available: bool,
    pub suno_tags: bool,
    pub model: String,
    pub endpoint: String,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            lyrics_mode: false,
            max_mode: false,
            offline_mode: false,
            story_mode: false,
            llm_available: false,
            suno_tags: false,
            model: "llama3.2".to_string(),
            endpoint: "http://localhost:11434".to_string(),
        }
    }
}

/// Routes one refinement request.
pub fn refine(
    req: &RefinementRequest,
    caps: &Capabilities,
    client: &dyn LlmClient,
    local: Option<&LocalLlmStatus>,
    seed: u32,
) -> RefineResult<GenerationResult> {
    if let Some(styles) = &req.direct_styles {
        if is_direct_style_list(styles) {
            return refine_direct(req, styles, caps, client, local, seed);
        }
    }

    match req.mode_hint.unwrap_or(RefinementMode::Combined) {
        RefinementMode::Style => refine_style_only(req, caps, client, seed),
        RefinementMode::Lyrics => refine_lyrics_only(req, caps, client, local),
        RefinementMode::Combined => refine_combined(req, caps, client, local, seed),
    }
}

/// Predicate deciding whether a style list drives Direct Mode: non-empty,
/// and every entry is a short single-line tag.
pub fn is_direct_style_list(styles: &[String]) -> bool {
    !styles.is_empty()
        && styles.iter().all(|s| {
            let t = s.trim();
            !t.is_empty() && !t.contains('\n') && t.len() <= 60
        })
}

fn refine_style_only(
    req: &RefinementRequest,
    caps: &Capabilities,
    client: &dyn LlmClient,
    seed: u32,
) -> RefineResult<GenerationResult> {
    let mut trace = req.style_changes.as_ref().map(|_| Vec::new());
    let styled = regenerate_style(&req.prompt, req.style_changes.as_ref(), trace.as_mut(), seed);
    let styled = apply_story_mode(styled, caps, client);

    Ok(GenerationResult {
        prompt: styled,
        title: req.title.clone(),
        lyrics: req.lyrics.clone(),
        trace,
    })
}

fn refine_lyrics_only(
    req: &RefinementRequest,
    caps: &Capabilities,
    client: &dyn LlmClient,
    local: Option<&LocalLlmStatus>,
) -> RefineResult<GenerationResult> {
    let feedback = req.feedback.as_deref().map(str::trim).unwrap_or("");
    if feedback.is_empty() {
        return Err(RefineError::validation(
            "feedback",
            "lyrics refinement requires non-empty feedback",
        ));
    }
    if !caps.lyrics_mode {
        return Ok(passthrough(req));
    }

    let lyrics = generate_lyrics(req, caps, client, local, feedback)?;
    Ok(GenerationResult {
        prompt: req.prompt.clone(),
        title: req.title.clone(),
        lyrics: Some(lyrics),
        trace: None,
    })
}

fn refine_combined(
    req: &RefinementRequest,
    caps: &Capabilities,
    client: &dyn LlmClient,
    local: Option<&LocalLlmStatus>,
    seed: u32,
) -> RefineResult<GenerationResult> {
    // Style regeneration is unconditional, never skipped.
    let mut trace = req.style_changes.as_ref().map(|_| Vec::new());
    let styled = regenerate_style(&req.prompt, req.style_changes.as_ref(), trace.as_mut(), seed);

    if !caps.lyrics_mode {
        let styled = apply_story_mode(styled, caps, client);
        return Ok(GenerationResult {
            prompt: styled,
            title: req.title.clone(),
            lyrics: req.lyrics.clone(),
            trace,
        });
    }

    let feedback = req.feedback.as_deref().map(str::trim).unwrap_or("");
    let feedback = if feedback.is_empty() {
        "Refresh the lyrics to match the regenerated style."
    } else {
        feedback
    };

    // LLM failure downgrades to the deterministic result.
    let lyrics = match generate_lyrics(req, caps, client, local, feedback) {
        Ok(lyrics) => Some(lyrics),
        Err(_) => req.lyrics.clone(),
    };

    Ok(GenerationResult {
        prompt: styled,
        title: req.title.clone(),
        lyrics,
        trace,
    })
}

fn refine_direct(
    req: &RefinementRequest,
    styles: &[String],
    caps: &Capabilities,
    client: &dyn LlmClient,
    local: Option<&LocalLlmStatus>,
    seed: u32,
) -> RefineResult<GenerationResult> {
    let prompt = build_direct_prompt(styles, caps, seed);

    let has_lyrics = req.lyrics.as_deref().is_some_and(|l| !l.trim().is_empty());
    let lyrics = if caps.lyrics_mode && !has_lyrics {
        let seed_text = req
            .feedback
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .unwrap_or("Match the listed style tags.");
        // Bootstrap is best-effort here; failure keeps the prompt usable.
        generate_lyrics(req, caps, client, local, seed_text).ok()
    } else {
        req.lyrics.clone()
    };

    Ok(GenerationResult {
        prompt,
        title: req.title.clone(),
        lyrics,
        trace: None,
    })
}

/// Builds an enriched prompt directly from an explicit style list.
fn build_direct_prompt(styles: &[String], caps: &Capabilities, seed: u32) -> String {
    use rand::seq::SliceRandom;

    let mut rng = create_component_rng(seed, "direct");
    let tags: Vec<&str> = styles.iter().map(|s| s.trim()).collect();
    let genre_key = tags
        .iter()
        .find_map(|t| genre::canonical(t))
        .unwrap_or(genre::DEFAULT_GENRE);
    let info = genre::info_or_default(genre_key);

    let mut moods: Vec<&str> = info.moods.to_vec();
    moods.shuffle(&mut rng);
    moods.truncate(2);

    let dialect = if caps.max_mode {
        Dialect::Max
    } else {
        Dialect::Standard
    };

    let mut lines: Vec<String> = Vec::new();
    if dialect == Dialect::Max {
        lines.push(MAX_MODE_SIGNATURES[0].to_string());
        if caps.suno_tags {
            lines.push(MAX_MODE_SIGNATURES[1].to_string());
        }
    }

    let mut field = |field: Field, value: &str| match dialect {
        Dialect::Standard => lines.push(format!("{}: {}", field.name(dialect), value)),
        Dialect::Max => lines.push(format!("{}: \"{}\"", field.name(dialect), value)),
    };
    field(Field::Genre, genre_key);
    field(Field::Bpm, &info.bpm.to_string());
    field(Field::Mood, &moods.join(", "));
    field(Field::StyleTags, &tags.join(", "));

    lines.join("\n")
}

/// Applies the remix strategies the change-set asks for, or the default
/// style set (mood, style tags, recording) when no change-set is given.
/// Genre and instruments regenerate only on explicit request. Every field
/// draws from its own seed-derived stream.
fn regenerate_style(
    text: &str,
    changes: Option<&StyleChanges>,
    mut trace: Option<&mut Vec<DecisionRecord>>,
    seed: u32,
) -> String {
    let Some(changes) = changes else {
        let out = remix::remix_mood(text, &mut create_component_rng(seed, "mood"));
        let out = remix::remix_style_tags(&out, &mut create_component_rng(seed, "style-tags"));
        return remix::remix_recording(&out, &mut create_component_rng(seed, "recording"));
    };

    let mut record = |key: &str, branch: &str, rationale: &str| {
        if let Some(records) = trace.as_deref_mut() {
            records.push(DecisionRecord::new("style", key, branch, rationale));
        }
    };

    let mut out = text.to_string();

    if changes.genre || changes.target_genre_count.is_some() {
        record("genre", "regenerate", "change-set requested genre");
        out = remix::remix_genre(
            &out,
            changes.target_genre_count,
            &mut create_component_rng(seed, "genre"),
        );
    } else {
        record("genre", "keep", "not requested");
    }
    if changes.mood {
        record("mood", "regenerate", "change-set requested mood");
        out = remix::remix_mood(&out, &mut create_component_rng(seed, "mood"));
    } else {
        record("mood", "keep", "not requested");
    }
    if changes.style_tags {
        record("style tags", "regenerate", "change-set requested style tags");
        out = remix::remix_style_tags(&out, &mut create_component_rng(seed, "style-tags"));
    } else {
        record("style tags", "keep", "not requested");
    }
    if changes.instruments {
        record("instruments", "regenerate", "change-set requested instruments");
        out = remix::remix_instruments(&out, &mut create_component_rng(seed, "instruments"));
    } else {
        record("instruments", "keep", "not requested");
    }
    if changes.recording {
        record("recording", "regenerate", "change-set requested recording");
        out = remix::remix_recording(&out, &mut create_component_rng(seed, "recording"));
    } else {
        record("recording", "keep", "not requested");
    }

    out
}

/// One LLM lyrics call: refine existing lyrics or bootstrap new ones.
/// Checks the offline-mode availability precondition first.
fn generate_lyrics(
    req: &RefinementRequest,
    caps: &Capabilities,
    client: &dyn LlmClient,
    local: Option<&LocalLlmStatus>,
    feedback: &str,
) -> RefineResult<String> {
    check_local_availability(caps, local)?;

    let dialect = Dialect::detect(&req.prompt);
    let genre_key = prompt::extract_genre(&req.prompt, dialect);
    let mood = prompt::field_value(&req.prompt, Field::Mood, dialect);

    let request = match req.lyrics.as_deref().filter(|l| !l.trim().is_empty()) {
        Some(existing) => llm::lyrics_refine_request(
            existing,
            feedback,
            genre_key,
            mood,
            req.lyrics_topic.as_deref(),
            req.locked_phrase.as_deref(),
        ),
        None => llm::lyrics_bootstrap_request(
            feedback,
            genre_key,
            mood,
            req.lyrics_topic.as_deref(),
            req.locked_phrase.as_deref(),
        ),
    };

    client
        .complete(&request)
        .map_err(|e| RefineError::Llm(e.to_string()))
}

fn check_local_availability(
    caps: &Capabilities,
    local: Option<&LocalLlmStatus>,
) -> RefineResult<()> {
    if !caps.offline_mode {
        return Ok(());
    }
    match local {
        Some(status) if !status.available => Err(RefineError::LocalLlmUnavailable {
            endpoint: caps.endpoint.clone(),
        }),
        Some(status) if !status.has_required_model => Err(RefineError::LocalModelMissing {
            model: caps.model.clone(),
        }),
        None => Err(RefineError::LocalLlmUnavailable {
            endpoint: caps.endpoint.clone(),
        }),
        Some(_) => Ok(()),
    }
}

/// Story-mode narrative transform: runs only when both flags are true and
/// silently keeps the deterministic text on any failure.
fn apply_story_mode(text: String, caps: &Capabilities, client: &dyn LlmClient) -> String {
    if !(caps.story_mode && caps.llm_available) {
        return text;
    }
    match client.complete(&llm::story_mode_request(&text)) {
        Ok(narrative) => narrative,
        Err(_) => text,
    }
}

fn passthrough(req: &RefinementRequest) -> GenerationResult {
    GenerationResult {
        prompt: req.prompt.clone(),
        title: req.title.clone(),
        lyrics: req.lyrics.clone(),
        trace: None,
    }
}
