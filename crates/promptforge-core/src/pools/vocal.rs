//! Vocal tag domain.
//!
//! The only probability-gated domain: selection draws once against the
//! genre's vocal weight before sampling, and an empty result is a
//! legitimate outcome for instrumental-leaning genres.

/// Breath and timbre descriptors.
pub static BREATH_TEXTURE: &[&str] = &[
    "breathy delivery",
    "airy falsetto",
    "whispered phrasing",
    "raspy edge",
    "smoky timbre",
    "soft head voice",
];

/// Delivery and phrasing descriptors.
pub static DELIVERY: &[&str] = &[
    "belted chorus",
    "melismatic runs",
    "spoken-word verses",
    "call-and-response",
    "staccato phrasing",
    "crooned verses",
];

/// Layering and arrangement descriptors.
pub static LAYERING: &[&str] = &[
    "stacked harmonies",
    "gospel choir backing",
    "doubled lead vocal",
    "octave-layered hooks",
    "ad-lib echoes",
];

pub static CATEGORIES: &[&[&str]] = &[BREATH_TEXTURE, DELIVERY, LAYERING];
