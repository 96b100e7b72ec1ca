//! Temporal tag domain: groove feel and rhythmic texture.

pub static GROOVE_FEEL: &[&str] = &[
    "swung sixteenths",
    "straight driving eighths",
    "half-time feel",
    "double-time rush",
    "laid-back pocket",
    "pushed urgency",
];

pub static RHYTHM_TEXTURE: &[&str] = &[
    "syncopated stabs",
    "polyrhythmic layers",
    "four-on-the-floor pulse",
    "broken-beat shuffle",
    "triplet flow",
];

pub static CATEGORIES: &[&[&str]] = &[GROOVE_FEEL, RHYTHM_TEXTURE];
