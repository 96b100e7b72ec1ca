//! Spatial tag domain: reverb spaces and stereo placement.

pub static REVERB_SPACE: &[&str] = &[
    "cathedral reverb",
    "plate reverb sheen",
    "tight room ambience",
    "cavernous echo",
    "spring reverb drip",
    "shimmer reverb tails",
];

pub static STEREO_FIELD: &[&str] = &[
    "wide stereo image",
    "hard-panned guitars",
    "mono low end",
    "swirling auto-pan",
    "headphone-intimate placement",
];

pub static CATEGORIES: &[&[&str]] = &[REVERB_SPACE, STEREO_FIELD];
