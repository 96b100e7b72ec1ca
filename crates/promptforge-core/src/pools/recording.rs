//! Recording-context sub-pools and curated per-genre context lists.
//!
//! The four sub-pools are disjoint by construction: a selection takes at
//! most one tag from each, so contradictory combinations ("professional
//! studio master" + "raw demo take", analog + digital technique) cannot
//! occur.

/// Production-quality tags. Exactly one is always chosen.
pub static PRODUCTION_QUALITY: &[&str] = &[
    "professional studio master",
    "polished radio-ready mix",
    "raw demo take",
    "gritty bootleg recording",
    "audiophile production",
    "home-studio charm",
];

/// Environment sub-pool, keyed so a genre hint can bias which group the
/// environment tag comes from.
pub static ENVIRONMENTS: &[(&str, &[&str])] = &[
    (
        "live",
        &[
            "live concert hall ambience",
            "intimate club stage",
            "festival main stage energy",
            "jazz cellar atmosphere",
            "church acoustics",
        ],
    ),
    (
        "studio",
        &[
            "treated studio room",
            "iso-booth dryness",
            "large live room",
            "vintage studio vibe",
        ],
    ),
    (
        "field",
        &[
            "open-air field recording",
            "rooftop session air",
            "bedroom recording intimacy",
        ],
    ),
];

/// Technique sub-pool, keyed for genre-hint bias (analog vs digital).
pub static TECHNIQUES: &[(&str, &[&str])] = &[
    (
        "analog",
        &[
            "tracked to two-inch tape",
            "analog console summing",
            "tube preamp warmth",
            "ribbon mic character",
            "vinyl mastering chain",
        ],
    ),
    (
        "digital",
        &[
            "pristine digital capture",
            "in-the-box production",
            "sample-accurate editing",
            "surgical digital eq",
        ],
    ),
];

/// Character tags, the final optional slot.
pub static CHARACTER: &[&str] = &[
    "tape hiss patina",
    "vinyl crackle",
    "warm saturation",
    "airy top end",
    "thick low-mid body",
    "cassette wobble",
];

/// Curated recording contexts per genre. When a genre key has entries here
/// they take priority over the generic structured selection.
pub static CURATED: &[(&str, &[&str])] = &[
    (
        "lofi",
        &[
            "dusty four-track tape recording",
            "bedroom studio at 2am",
            "vinyl crackle over a warm mix",
            "cassette-saturated drums",
            "rainy-window room tone",
        ],
    ),
    (
        "jazz",
        &[
            "small smoky club, single ribbon mic",
            "late-night session cut live to tape",
            "upright bass close-miked in a warm room",
            "vintage blue-label studio vibe",
            "brushes captured with room bleed",
        ],
    ),
    (
        "techno",
        &[
            "concrete warehouse pa rumble",
            "club system with subsonic weight",
            "analog gear tracked straight to dat",
            "stroboscopic basement venue",
            "modular rig recorded live",
        ],
    ),
    (
        "classical",
        &[
            "concert hall with natural decay",
            "decca-tree orchestral capture",
            "chamber ensemble in a stone chapel",
            "audience-silent live performance",
            "spaced-pair room ambience",
        ],
    ),
    (
        "rock",
        &[
            "big drum room with smashed room mics",
            "amp stack miked close and far",
            "live-off-the-floor band take",
            "garage rehearsal grit",
            "arena soundcheck echo",
        ],
    ),
];

/// Curated context list for a canonical genre key, if any.
pub fn curated_for(genre: &str) -> Option<&'static [&'static str]> {
    CURATED
        .iter()
        .find(|(key, _)| *key == genre)
        .map(|(_, contexts)| *contexts)
}
