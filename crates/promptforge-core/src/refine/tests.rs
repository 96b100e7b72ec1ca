//! Tests for the refinement router.

use pretty_assertions::assert_eq;
use std::cell::RefCell;

use super::*;
use crate::error::RefineError;

/// Scripted collaborator: returns a fixed response (or fails) and records
/// every request it sees.
struct FakeLlm {
    response: Option<String>,
    calls: RefCell<Vec<LlmRequest>>,
}

impl FakeLlm {
    fn replying(text: &str) -> Self {
        Self {
            response: Some(text.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            response: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl LlmClient for FakeLlm {
    fn complete(&self, request: &LlmRequest) -> Result<String, LlmError> {
        self.calls.borrow_mut().push(request.clone());
        self.response
            .clone()
            .ok_or_else(|| LlmError("connection timed out".to_string()))
    }
}

const PROMPT: &str = "Genre: rock\nBPM: 120\nMood: energetic\nInstruments: guitar, drums\nStyle Tags: fuzzy\nRecording: demo";

fn request(prompt: &str) -> RefinementRequest {
    RefinementRequest {
        prompt: prompt.to_string(),
        title: "Night Drive".to_string(),
        feedback: None,
        lyrics: None,
        locked_phrase: None,
        lyrics_topic: None,
        direct_styles: None,
        style_changes: None,
        mode_hint: None,
    }
}

#[test]
fn test_lyrics_mode_empty_feedback_rejected_without_llm_call() {
    let llm = FakeLlm::replying("la la la");
    let caps = Capabilities {
        lyrics_mode: true,
        ..Capabilities::default()
    };
    let mut req = request(PROMPT);
    req.mode_hint = Some(RefinementMode::Lyrics);
    req.feedback = Some("".to_string());

    let err = refine(&req, &caps, &llm, None, 1).unwrap_err();

    match err {
        RefineError::Validation { field, .. } => assert_eq!(field, "feedback"),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(llm.call_count(), 0);
}

#[test]
fn test_style_mode_passes_title_and_lyrics_through() {
    let llm = FakeLlm::replying("should never be called");
    let mut req = request(PROMPT);
    req.mode_hint = Some(RefinementMode::Style);
    req.lyrics = Some("existing lyrics".to_string());

    let result = refine(&req, &Capabilities::default(), &llm, None, 7).unwrap();

    assert_eq!(result.title, "Night Drive");
    assert_eq!(result.lyrics.as_deref(), Some("existing lyrics"));
    assert_eq!(llm.call_count(), 0);
    // Style fields were regenerated in place; genre stays untouched.
    assert!(result.prompt.contains("Genre: rock"));
    assert!(result.prompt.contains("BPM: 120"));
}

#[test]
fn test_style_mode_without_mood_field_regenerates_style_tags_only() {
    let prompt = "Genre: ambient\nBPM: 70\nInstruments: synth pads\nStyle Tags: airy";
    let llm = FakeLlm::failing();
    let mut req = request(prompt);
    req.mode_hint = Some(RefinementMode::Style);

    let result = refine(&req, &Capabilities::default(), &llm, None, 3).unwrap();

    assert!(result.prompt.contains("Genre: ambient"));
    assert!(result.prompt.contains("BPM: 70"));
    assert!(result.prompt.contains("Instruments: synth pads"));
    let tags_line = result
        .prompt
        .split('\n')
        .find(|l| l.starts_with("Style Tags:"))
        .unwrap();
    assert_ne!(tags_line, "Style Tags: airy");
}

#[test]
fn test_default_mode_is_combined() {
    let llm = FakeLlm::replying("[Verse]\nnew words");
    let caps = Capabilities {
        lyrics_mode: true,
        ..Capabilities::default()
    };
    let mut req = request(PROMPT);
    req.lyrics = Some("old words".to_string());
    req.feedback = Some("make it darker".to_string());

    let result = refine(&req, &caps, &llm, None, 5).unwrap();

    assert_eq!(result.lyrics.as_deref(), Some("[Verse]\nnew words"));
    assert_eq!(llm.call_count(), 1);
    // style regeneration ran first
    let mood_line = result
        .prompt
        .split('\n')
        .find(|l| l.starts_with("Mood:"))
        .unwrap();
    assert_ne!(mood_line, "Mood: energetic");
}

#[test]
fn test_combined_downgrades_on_llm_failure() {
    let llm = FakeLlm::failing();
    let caps = Capabilities {
        lyrics_mode: true,
        ..Capabilities::default()
    };
    let mut req = request(PROMPT);
    req.lyrics = Some("old words".to_string());
    req.feedback = Some("make it darker".to_string());

    let result = refine(&req, &caps, &llm, None, 5).unwrap();

    // deterministic style result survives, lyrics fall back unchanged
    assert_eq!(result.lyrics.as_deref(), Some("old words"));
    assert_ne!(result.prompt, PROMPT);
}

#[test]
fn test_lyrics_mode_bootstrap_when_no_lyrics_exist() {
    let llm = FakeLlm::replying("[Verse]\nfresh start");
    let caps = Capabilities {
        lyrics_mode: true,
        ..Capabilities::default()
    };
    let mut req = request(PROMPT);
    req.mode_hint = Some(RefinementMode::Lyrics);
    req.feedback = Some("a song about leaving home".to_string());

    let result = refine(&req, &caps, &llm, None, 2).unwrap();

    assert_eq!(result.lyrics.as_deref(), Some("[Verse]\nfresh start"));
    // prompt text is returned unchanged on the lyrics path
    assert_eq!(result.prompt, PROMPT);
    let calls = llm.calls.borrow();
    assert!(calls[0].user_prompt.contains("Write new lyrics"));
}

#[test]
fn test_offline_mode_unavailable_endpoint_is_fatal_for_lyrics() {
    let llm = FakeLlm::replying("unused");
    let caps = Capabilities {
        lyrics_mode: true,
        offline_mode: true,
        ..Capabilities::default()
    };
    let mut req = request(PROMPT);
    req.mode_hint = Some(RefinementMode::Lyrics);
    req.feedback = Some("anything".to_string());
    req.lyrics = Some("old".to_string());

    let status = LocalLlmStatus {
        available: false,
        has_required_model: false,
    };
    let err = refine(&req, &caps, &llm, Some(&status), 2).unwrap_err();
    assert!(matches!(err, RefineError::LocalLlmUnavailable { .. }));
    assert_eq!(llm.call_count(), 0);
}

#[test]
fn test_offline_mode_missing_model_is_fatal_for_lyrics() {
    let llm = FakeLlm::replying("unused");
    let caps = Capabilities {
        lyrics_mode: true,
        offline_mode: true,
        ..Capabilities::default()
    };
    let mut req = request(PROMPT);
    req.mode_hint = Some(RefinementMode::Lyrics);
    req.feedback = Some("anything".to_string());

    let status = LocalLlmStatus {
        available: true,
        has_required_model: false,
    };
    let err = refine(&req, &caps, &llm, Some(&status), 2).unwrap_err();
    assert!(matches!(err, RefineError::LocalModelMissing { .. }));
}

#[test]
fn test_direct_mode_builds_prompt_from_style_list() {
    let llm = FakeLlm::replying("unused");
    let mut req = request("ignored original prompt");
    req.direct_styles = Some(vec![
        "techno".to_string(),
        "acid squelch".to_string(),
        "cavernous echo".to_string(),
    ]);

    let result = refine(&req, &Capabilities::default(), &llm, None, 9).unwrap();

    assert!(result.prompt.contains("Genre: techno"));
    assert!(result.prompt.contains("BPM: 130"));
    assert!(result
        .prompt
        .contains("Style Tags: techno, acid squelch, cavernous echo"));
    assert_eq!(result.title, "Night Drive");
    assert_eq!(llm.call_count(), 0);
}

#[test]
fn test_direct_mode_max_dialect_with_banner() {
    let llm = FakeLlm::replying("unused");
    let caps = Capabilities {
        max_mode: true,
        suno_tags: true,
        ..Capabilities::default()
    };
    let mut req = request("");
    req.direct_styles = Some(vec!["lofi".to_string(), "vinyl crackle".to_string()]);

    let result = refine(&req, &caps, &llm, None, 9).unwrap();

    assert!(result.prompt.starts_with("[Is_MAX_MODE: MAX](MAX)\n"));
    assert!(result.prompt.contains("::tags realistic music ::"));
    assert!(result.prompt.contains("genre: \"lofi\""));
    assert!(result.prompt.contains("style tags: \"lofi, vinyl crackle\""));
}

#[test]
fn test_direct_mode_bootstraps_lyrics_once_when_active() {
    let llm = FakeLlm::replying("[Verse]\nbootstrapped");
    let caps = Capabilities {
        lyrics_mode: true,
        ..Capabilities::default()
    };
    let mut req = request("");
    req.direct_styles = Some(vec!["jazz".to_string()]);

    let result = refine(&req, &caps, &llm, None, 4).unwrap();

    assert_eq!(result.lyrics.as_deref(), Some("[Verse]\nbootstrapped"));
    assert_eq!(llm.call_count(), 1);
}

#[test]
fn test_direct_mode_keeps_existing_lyrics() {
    let llm = FakeLlm::replying("should not be called");
    let caps = Capabilities {
        lyrics_mode: true,
        ..Capabilities::default()
    };
    let mut req = request("");
    req.direct_styles = Some(vec!["jazz".to_string()]);
    req.lyrics = Some("already written".to_string());

    let result = refine(&req, &caps, &llm, None, 4).unwrap();

    assert_eq!(result.lyrics.as_deref(), Some("already written"));
    assert_eq!(llm.call_count(), 0);
}

#[test]
fn test_blank_style_list_does_not_trigger_direct_mode() {
    assert!(!is_direct_style_list(&[]));
    assert!(!is_direct_style_list(&["  ".to_string()]));
    assert!(is_direct_style_list(&["warm pads".to_string()]));
}

#[test]
fn test_story_mode_transforms_style_result() {
    let llm = FakeLlm::replying("A smoky club at midnight...");
    let caps = Capabilities {
        story_mode: true,
        llm_available: true,
        ..Capabilities::default()
    };
    let mut req = request(PROMPT);
    req.mode_hint = Some(RefinementMode::Style);

    let result = refine(&req, &caps, &llm, None, 8).unwrap();
    assert_eq!(result.prompt, "A smoky club at midnight...");
    assert_eq!(llm.call_count(), 1);
}

#[test]
fn test_story_mode_failure_keeps_deterministic_result() {
    let llm = FakeLlm::failing();
    let caps = Capabilities {
        story_mode: true,
        llm_available: true,
        ..Capabilities::default()
    };
    let mut req = request(PROMPT);
    req.mode_hint = Some(RefinementMode::Style);

    let result = refine(&req, &caps, &llm, None, 8).unwrap();
    // silently falls back to the pre-transform text
    assert!(result.prompt.contains("Genre: rock"));
}

#[test]
fn test_story_mode_skipped_when_either_flag_false() {
    let llm = FakeLlm::replying("narrative");
    let caps = Capabilities {
        story_mode: true,
        llm_available: false,
        ..Capabilities::default()
    };
    let mut req = request(PROMPT);
    req.mode_hint = Some(RefinementMode::Style);

    refine(&req, &caps, &llm, None, 8).unwrap();
    assert_eq!(llm.call_count(), 0);
}

#[test]
fn test_change_set_emits_decision_trace() {
    let llm = FakeLlm::failing();
    let mut req = request(PROMPT);
    req.mode_hint = Some(RefinementMode::Style);
    req.style_changes = Some(StyleChanges {
        mood: true,
        target_genre_count: Some(2),
        ..StyleChanges::default()
    });

    let result = refine(&req, &Capabilities::default(), &llm, None, 6).unwrap();

    let trace = result.trace.unwrap();
    let genre_record = trace.iter().find(|r| r.key == "genre").unwrap();
    assert_eq!(genre_record.branch, "regenerate");
    let mood_record = trace.iter().find(|r| r.key == "mood").unwrap();
    assert_eq!(mood_record.branch, "regenerate");
    let tags_record = trace.iter().find(|r| r.key == "style tags").unwrap();
    assert_eq!(tags_record.branch, "keep");

    // change-set routing altered only the requested fields
    assert!(result.prompt.contains("Style Tags: fuzzy"));
    assert!(result.prompt.contains("Recording: demo"));
}

#[test]
fn test_no_trace_without_change_set() {
    let llm = FakeLlm::failing();
    let mut req = request(PROMPT);
    req.mode_hint = Some(RefinementMode::Style);

    let result = refine(&req, &Capabilities::default(), &llm, None, 6).unwrap();
    assert!(result.trace.is_none());
}

#[test]
fn test_full_pipeline_determinism() {
    let caps = Capabilities {
        lyrics_mode: true,
        ..Capabilities::default()
    };
    let mut req = request(PROMPT);
    req.lyrics = Some("old words".to_string());
    req.feedback = Some("brighter".to_string());

    let llm1 = FakeLlm::replying("[Verse]\nsame");
    let llm2 = FakeLlm::replying("[Verse]\nsame");

    let a = refine(&req, &caps, &llm1, None, 42).unwrap();
    let b = refine(&req, &caps, &llm2, None, 42).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_field_streams_are_independent_of_change_set_shape() {
    // Same seed, same requested field: regenerating additional fields must
    // not shift the draws the recording stream sees.
    let llm = FakeLlm::failing();

    let mut recording_only = request(PROMPT);
    recording_only.mode_hint = Some(RefinementMode::Style);
    recording_only.style_changes = Some(StyleChanges {
        recording: true,
        ..StyleChanges::default()
    });

    let mut mood_and_recording = request(PROMPT);
    mood_and_recording.mode_hint = Some(RefinementMode::Style);
    mood_and_recording.style_changes = Some(StyleChanges {
        mood: true,
        recording: true,
        ..StyleChanges::default()
    });

    for seed in 0..20u32 {
        let a = refine(&recording_only, &Capabilities::default(), &llm, None, seed).unwrap();
        let b = refine(&mood_and_recording, &Capabilities::default(), &llm, None, seed).unwrap();

        let recording_line = |prompt: &str| {
            prompt
                .split('\n')
                .find(|l| l.starts_with("Recording:"))
                .map(str::to_string)
                .unwrap()
        };
        assert_eq!(
            recording_line(&a.prompt),
            recording_line(&b.prompt),
            "seed {seed}"
        );
    }
}
