//! Prompt text model: dialects, named fields, and header handling.
//!
//! A prompt is a text blob carrying zero or more single-line named fields
//! plus free prose. Two dialects coexist: `Standard` capitalized
//! colon-fields (`Genre: rock`) and `Max` lowercase quoted fields
//! (`genre: "rock"`) with an optional banner header. The dialect is
//! resolved once per prompt and passed through every field operation
//! instead of being re-detected per call.

mod fields;

pub use fields::{
    extract_genre, extract_genres, field_value, raw_genre_count, replace_field,
};

/// Fixed signature substrings identifying a Max-dialect prompt.
pub const MAX_MODE_SIGNATURES: &[&str] =
    &["[Is_MAX_MODE: MAX](MAX)", "::tags realistic music ::"];

/// The two textual conventions for encoding named fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Capitalized bare-value fields: `Genre: rock`.
    Standard,
    /// Lowercase quoted fields: `genre: "rock"`, optional banner header.
    Max,
}

impl Dialect {
    /// Resolves the dialect for a prompt.
    ///
    /// A Max prompt is recognized by either fixed signature substring
    /// anywhere in the text, or failing that by the lowercase-quoted shape
    /// of its first field line.
    pub fn detect(text: &str) -> Dialect {
        if MAX_MODE_SIGNATURES.iter().any(|sig| text.contains(sig)) {
            return Dialect::Max;
        }
        for line in text.lines() {
            for field in Field::ALL {
                if let Some(rest) = line.strip_prefix(field.name(Dialect::Max)) {
                    if let Some(value) = rest.strip_prefix(':') {
                        if value.trim_start().starts_with('"') {
                            return Dialect::Max;
                        }
                    }
                }
            }
        }
        Dialect::Standard
    }
}

/// The named single-line fields a prompt may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Genre,
    Bpm,
    Mood,
    Instruments,
    StyleTags,
    Recording,
}

impl Field {
    pub const ALL: &'static [Field] = &[
        Field::Genre,
        Field::Bpm,
        Field::Mood,
        Field::Instruments,
        Field::StyleTags,
        Field::Recording,
    ];

    /// The field's name token in the given dialect. Matching is
    /// case-sensitive to the dialect in use.
    pub fn name(self, dialect: Dialect) -> &'static str {
        match (self, dialect) {
            (Field::Genre, Dialect::Standard) => "Genre",
            (Field::Genre, Dialect::Max) => "genre",
            (Field::Bpm, Dialect::Standard) => "BPM",
            (Field::Bpm, Dialect::Max) => "bpm",
            (Field::Mood, Dialect::Standard) => "Mood",
            (Field::Mood, Dialect::Max) => "mood",
            (Field::Instruments, Dialect::Standard) => "Instruments",
            (Field::Instruments, Dialect::Max) => "instruments",
            (Field::StyleTags, Dialect::Standard) => "Style Tags",
            (Field::StyleTags, Dialect::Max) => "style tags",
            (Field::Recording, Dialect::Standard) => "Recording",
            (Field::Recording, Dialect::Max) => "recording",
        }
    }
}

/// Strips a Max banner header: the contiguous run of bracket- or
/// `::`-prefixed lines at the top of the text. Returns the input unchanged
/// when no Max signature is present.
pub fn strip_header(text: &str) -> String {
    if !MAX_MODE_SIGNATURES.iter().any(|sig| text.contains(sig)) {
        return text.to_string();
    }

    let mut lines = text.split('\n');
    let mut kept: Vec<&str> = Vec::new();
    let mut in_header = true;
    for line in lines.by_ref() {
        let trimmed = line.trim_start().trim_end_matches('\r');
        if in_header && (trimmed.starts_with('[') || trimmed.starts_with("::")) {
            continue;
        }
        in_header = false;
        kept.push(line);
    }
    kept.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_detect_standard() {
        let text = "Genre: rock\nBPM: 120\nMood: energetic";
        assert_eq!(Dialect::detect(text), Dialect::Standard);
    }

    #[test]
    fn test_detect_max_by_banner_signature() {
        let text = "[Is_MAX_MODE: MAX](MAX)\ngenre: \"rock\"";
        assert_eq!(Dialect::detect(text), Dialect::Max);
    }

    #[test]
    fn test_detect_max_by_tags_signature() {
        let text = "::tags realistic music ::\ngenre: \"rock\"";
        assert_eq!(Dialect::detect(text), Dialect::Max);
    }

    #[test]
    fn test_detect_max_by_quoted_field_shape() {
        let text = "genre: \"rock\"\nbpm: \"120\"";
        assert_eq!(Dialect::detect(text), Dialect::Max);
    }

    #[test]
    fn test_strip_header_removes_only_top_banner() {
        let text = "[Is_MAX_MODE: MAX](MAX)\n::tags realistic music ::\ngenre: \"rock\"\n[not a header]";
        let stripped = strip_header(text);
        assert_eq!(stripped, "genre: \"rock\"\n[not a header]");
    }

    #[test]
    fn test_strip_header_noop_without_signature() {
        let text = "[Header Tags]\nGenre: rock";
        assert_eq!(strip_header(text), text);
    }
}
