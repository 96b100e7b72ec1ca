//! Harmonic tag domain: chord color and tonal center.

pub static CHORD_COLOR: &[&str] = &[
    "lush seventh chords",
    "suspended chords",
    "modal interchange",
    "chromatic passing chords",
    "open fifths",
    "cluster voicings",
];

pub static TONAL_CENTER: &[&str] = &[
    "minor-key gravity",
    "lydian brightness",
    "dorian groove",
    "bluesy bent thirds",
    "drone-rooted harmony",
];

pub static CATEGORIES: &[&[&str]] = &[CHORD_COLOR, TONAL_CENTER];
