//! Field extraction and rewriting.
//!
//! Writers address only the first line matching a field name and rewrite
//! only the value portion, preserving the dialect's quoting convention and
//! every other line byte-for-byte. A missing field is never an error: reads
//! fall back to defaults and writes return the input unchanged.

use super::{Dialect, Field};
use crate::genre::{self, DEFAULT_GENRE};

/// Parses one line as a field line, returning the value portion with the
/// dialect's quoting removed. `None` when the line is not this field.
fn parse_line<'a>(line: &'a str, field: Field, dialect: Dialect) -> Option<&'a str> {
    let rest = line.strip_prefix(field.name(dialect))?;
    let value = rest.strip_prefix(':')?;
    let value = value.trim().trim_end_matches('\r').trim();
    match dialect {
        Dialect::Max => Some(
            value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value),
        ),
        Dialect::Standard => Some(value),
    }
}

/// Value of the first matching field line, if present.
pub fn field_value<'a>(text: &'a str, field: Field, dialect: Dialect) -> Option<&'a str> {
    text.split('\n')
        .find_map(|line| parse_line(line, field, dialect))
}

/// Replaces the value of the first line matching `field`, preserving the
/// dialect's quoting convention and leaving every other line untouched.
/// Returns the input unchanged when no matching line exists; never inserts
/// a missing field.
pub fn replace_field(text: &str, field: Field, new_value: &str, dialect: Dialect) -> String {
    let mut replaced = false;
    let lines: Vec<String> = text
        .split('\n')
        .map(|line| {
            if !replaced && parse_line(line, field, dialect).is_some() {
                replaced = true;
                let cr = if line.ends_with('\r') { "\r" } else { "" };
                match dialect {
                    Dialect::Standard => {
                        format!("{}: {}{}", field.name(dialect), new_value, cr)
                    }
                    Dialect::Max => {
                        format!("{}: \"{}\"{}", field.name(dialect), new_value, cr)
                    }
                }
            } else {
                line.to_string()
            }
        })
        .collect();

    if !replaced {
        return text.to_string();
    }
    lines.join("\n")
}

/// First genre token of the genre field, canonicalized against the
/// registry. Falls back to [`DEFAULT_GENRE`] when the field is absent or
/// its first token is unknown.
pub fn extract_genre(text: &str, dialect: Dialect) -> &'static str {
    field_value(text, Field::Genre, dialect)
        .and_then(|value| value.split(',').next())
        .and_then(genre::canonical)
        .unwrap_or(DEFAULT_GENRE)
}

/// All registry-valid genre tokens of the genre field, in input order.
/// Returns `[DEFAULT_GENRE]` when nothing valid remains.
pub fn extract_genres(text: &str, dialect: Dialect) -> Vec<&'static str> {
    let genres: Vec<&'static str> = field_value(text, Field::Genre, dialect)
        .map(|value| {
            value
                .split(',')
                .filter_map(genre::canonical)
                .collect()
        })
        .unwrap_or_default();

    if genres.is_empty() {
        vec![DEFAULT_GENRE]
    } else {
        genres
    }
}

/// Number of comma-separated raw tokens in the genre field, computed before
/// canonicalization. 1 when the field is absent or empty.
pub fn raw_genre_count(text: &str, dialect: Dialect) -> usize {
    field_value(text, Field::Genre, dialect)
        .map(|value| {
            value
                .split(',')
                .filter(|token| !token.trim().is_empty())
                .count()
        })
        .filter(|&count| count > 0)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const STANDARD: &str = "Genre: rock\nBPM: 120\nMood: energetic\nInstruments: guitar, drums";
    const MAX: &str = "genre: \"rock\"\nbpm: \"120\"\nmood: \"energetic\"\ninstruments: \"guitar, drums\"";

    #[test]
    fn test_field_value_both_dialects() {
        assert_eq!(
            field_value(STANDARD, Field::Mood, Dialect::Standard),
            Some("energetic")
        );
        assert_eq!(field_value(MAX, Field::Mood, Dialect::Max), Some("energetic"));
        assert_eq!(field_value(STANDARD, Field::Recording, Dialect::Standard), None);
    }

    #[test]
    fn test_replace_field_preserves_other_lines() {
        let out = replace_field(STANDARD, Field::Mood, "serene, brooding", Dialect::Standard);
        assert_eq!(
            out,
            "Genre: rock\nBPM: 120\nMood: serene, brooding\nInstruments: guitar, drums"
        );
    }

    #[test]
    fn test_replace_field_preserves_max_quoting() {
        let out = replace_field(MAX, Field::Genre, "jazz", Dialect::Max);
        assert!(out.starts_with("genre: \"jazz\"\n"));
        assert!(out.contains("instruments: \"guitar, drums\""));
    }

    #[test]
    fn test_replace_field_missing_is_noop() {
        let out = replace_field(STANDARD, Field::Recording, "anything", Dialect::Standard);
        assert_eq!(out, STANDARD);
    }

    #[test]
    fn test_replace_field_first_line_only() {
        let text = "Mood: a\nMood: b";
        let out = replace_field(text, Field::Mood, "c", Dialect::Standard);
        assert_eq!(out, "Mood: c\nMood: b");
    }

    #[test]
    fn test_replace_field_preserves_crlf() {
        let text = "Genre: rock\r\nMood: energetic\r\nBPM: 120";
        let out = replace_field(text, Field::Mood, "serene", Dialect::Standard);
        assert_eq!(out, "Genre: rock\r\nMood: serene\r\nBPM: 120");
    }

    #[test]
    fn test_extract_genre_fallbacks() {
        assert_eq!(extract_genre(STANDARD, Dialect::Standard), "rock");
        assert_eq!(
            extract_genre("Genre: vaporwave", Dialect::Standard),
            DEFAULT_GENRE
        );
        assert_eq!(
            extract_genre("free prose, no fields", Dialect::Standard),
            DEFAULT_GENRE
        );
    }

    #[test]
    fn test_extract_genres_filters_and_preserves_order() {
        let text = "Genre: jazz, vaporwave, rock, funk";
        assert_eq!(
            extract_genres(text, Dialect::Standard),
            vec!["jazz", "rock", "funk"]
        );

        let text = "Genre: vaporwave, chillhop";
        assert_eq!(extract_genres(text, Dialect::Standard), vec![DEFAULT_GENRE]);
    }

    #[test]
    fn test_raw_count_pre_canonicalization() {
        // unknown tokens still count before canonicalization
        assert_eq!(
            raw_genre_count("Genre: jazz, vaporwave, rock", Dialect::Standard),
            3
        );
        assert_eq!(raw_genre_count("Genre: rock", Dialect::Standard), 1);
        assert_eq!(raw_genre_count("no field here", Dialect::Standard), 1);
    }

    #[test]
    fn test_extractors_honor_the_passed_dialect() {
        // The caller's resolved dialect governs; nothing re-detects it.
        let text = "Genre: rock";
        assert_eq!(extract_genre(text, Dialect::Standard), "rock");
        assert_eq!(extract_genre(text, Dialect::Max), DEFAULT_GENRE);
        assert_eq!(raw_genre_count(text, Dialect::Max), 1);
    }

    #[test]
    fn test_max_field_names_are_case_sensitive() {
        // A Standard-cased line is not addressed by Max-dialect ops.
        let text = "Genre: rock";
        assert_eq!(field_value(text, Field::Genre, Dialect::Max), None);
    }
}
