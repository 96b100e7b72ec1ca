//! Dynamic tag domain: intensity arcs and compression feel.

pub static INTENSITY_ARC: &[&str] = &[
    "slow-burn build",
    "explosive drops",
    "hushed verses into roaring chorus",
    "terraced dynamics",
    "sudden breakdowns",
];

pub static COMPRESSION_FEEL: &[&str] = &[
    "pumping sidechain",
    "glued bus compression",
    "uncompressed dynamic swings",
    "gentle leveling",
];

pub static CATEGORIES: &[&[&str]] = &[INTENSITY_ARC, COMPRESSION_FEEL];
