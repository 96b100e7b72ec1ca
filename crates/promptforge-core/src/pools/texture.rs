//! Texture tag pools for the electronic-vs-organic style-tag blend.
//!
//! Each genre's electronic ratio decides, per selected tag, which of these
//! two pools the tag is drawn from (1.0 = always electronic, 0.0 = always
//! organic).

pub static ELECTRONIC: &[&str] = &[
    "analog synth warmth",
    "granular textures",
    "bitcrushed edges",
    "supersaw stacks",
    "fm bell tones",
    "acid squelch",
    "vocoder sheen",
    "glitch stutters",
    "tape-saturated pads",
    "arpeggiated sequences",
];

pub static ORGANIC: &[&str] = &[
    "live room drums",
    "fingerpicked warmth",
    "bowed string swells",
    "woody upright bass",
    "breathy woodwinds",
    "hand percussion",
    "amp hum and grit",
    "natural vibrato",
    "felt piano intimacy",
    "acoustic strums",
];
