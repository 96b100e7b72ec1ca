//! Canonical genre registry.
//!
//! Each entry carries the metadata the remix strategies and the weighted
//! selector need: a typical BPM, default mood and instrument associations,
//! a 5-domain sampling weight vector, and an electronic ratio controlling
//! the electronic-vs-organic style-tag blend (1.0 = fully electronic pool,
//! 0.0 = fully organic pool).
//!
//! The registry is plain immutable data. Lookup never fails visibly: genre
//! resolution falls back to [`DEFAULT_GENRE`] instead of erroring.

/// Fallback genre used whenever resolution fails.
pub const DEFAULT_GENRE: &str = "pop";

/// Maximum number of genre slots a prompt's genre field may target.
pub const MAX_GENRE_SLOTS: usize = 4;

/// Per-genre sampling probabilities for the five weighted tag domains.
///
/// The vocal weight doubles as the probability gate for vocal tag
/// selection: a gate draw above it yields a legitimate empty selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainWeights {
    pub vocal: f64,
    pub spatial: f64,
    pub harmonic: f64,
    pub dynamic: f64,
    pub temporal: f64,
}

/// One genre registry entry.
#[derive(Debug, Clone, Copy)]
pub struct GenreInfo {
    /// Canonical lowercase key.
    pub key: &'static str,
    /// Typical BPM for the genre.
    pub bpm: u16,
    /// Default mood associations.
    pub moods: &'static [&'static str],
    /// Default instrument suggestions.
    pub instruments: &'static [&'static str],
    /// Weighted-domain sampling vector.
    pub weights: DomainWeights,
    /// Electronic-vs-organic style-tag blend ratio in [0, 1].
    pub electronic: f64,
}

const fn weights(vocal: f64, spatial: f64, harmonic: f64, dynamic: f64, temporal: f64) -> DomainWeights {
    DomainWeights {
        vocal,
        spatial,
        harmonic,
        dynamic,
        temporal,
    }
}

/// The fixed genre registry. Every entry has an explicit weight vector;
/// no weight vectors exist for genres outside this table.
pub static GENRES: &[GenreInfo] = &[
    GenreInfo {
        key: "rock",
        bpm: 120,
        moods: &["driving", "rebellious", "raw", "anthemic"],
        instruments: &["electric guitar", "bass guitar", "drums", "hammond organ"],
        weights: weights(0.7, 0.5, 0.4, 0.6, 0.5),
        electronic: 0.2,
    },
    GenreInfo {
        key: "pop",
        bpm: 118,
        moods: &["upbeat", "catchy", "bright", "playful"],
        instruments: &["synth", "piano", "bass", "drum machine"],
        weights: weights(1.0, 0.5, 0.4, 0.5, 0.4),
        electronic: 0.6,
    },
    GenreInfo {
        key: "jazz",
        bpm: 110,
        moods: &["smoky", "sophisticated", "mellow", "late-night"],
        instruments: &["saxophone", "upright bass", "piano", "brushed drums", "trumpet"],
        weights: weights(0.5, 0.6, 0.8, 0.5, 0.6),
        electronic: 0.05,
    },
    GenreInfo {
        key: "blues",
        bpm: 90,
        moods: &["soulful", "gritty", "melancholic", "weary"],
        instruments: &["slide guitar", "harmonica", "upright bass", "drums"],
        weights: weights(0.8, 0.4, 0.5, 0.5, 0.4),
        electronic: 0.05,
    },
    GenreInfo {
        key: "classical",
        bpm: 80,
        moods: &["elegant", "sweeping", "serene", "dramatic"],
        instruments: &["string section", "french horn", "timpani", "harp"],
        weights: weights(0.2, 0.8, 0.9, 0.8, 0.5),
        electronic: 0.0,
    },
    GenreInfo {
        key: "folk",
        bpm: 100,
        moods: &["earthy", "wistful", "intimate", "storytelling"],
        instruments: &["acoustic guitar", "banjo", "fiddle", "mandolin"],
        weights: weights(0.8, 0.3, 0.4, 0.3, 0.3),
        electronic: 0.0,
    },
    GenreInfo {
        key: "country",
        bpm: 104,
        moods: &["heartfelt", "dusty", "nostalgic", "open-road"],
        instruments: &["pedal steel", "acoustic guitar", "bass", "drums"],
        weights: weights(0.9, 0.3, 0.4, 0.4, 0.4),
        electronic: 0.1,
    },
    GenreInfo {
        key: "metal",
        bpm: 140,
        moods: &["aggressive", "dark", "relentless", "epic"],
        instruments: &["distorted guitar", "double-kick drums", "bass guitar"],
        weights: weights(0.6, 0.4, 0.4, 0.9, 0.7),
        electronic: 0.15,
    },
    GenreInfo {
        key: "punk",
        bpm: 170,
        moods: &["defiant", "frantic", "raw", "urgent"],
        instruments: &["power-chord guitar", "bass guitar", "drums"],
        weights: weights(0.8, 0.2, 0.2, 0.8, 0.8),
        electronic: 0.1,
    },
    GenreInfo {
        key: "funk",
        bpm: 106,
        moods: &["groovy", "swaggering", "playful", "strutting"],
        instruments: &["slap bass", "clavinet", "horn section", "wah guitar"],
        weights: weights(0.7, 0.4, 0.5, 0.6, 0.8),
        electronic: 0.2,
    },
    GenreInfo {
        key: "soul",
        bpm: 96,
        moods: &["warm", "yearning", "uplifting", "tender"],
        instruments: &["rhodes piano", "horn section", "bass", "string section"],
        weights: weights(1.0, 0.5, 0.6, 0.5, 0.4),
        electronic: 0.1,
    },
    GenreInfo {
        key: "reggae",
        bpm: 75,
        moods: &["laid-back", "sunny", "hypnotic", "rootsy"],
        instruments: &["skank guitar", "bubbling organ", "bass", "drums"],
        weights: weights(0.7, 0.6, 0.4, 0.3, 0.7),
        electronic: 0.2,
    },
    GenreInfo {
        key: "hip hop",
        bpm: 90,
        moods: &["confident", "gritty", "nocturnal", "heavy"],
        instruments: &["808 bass", "sampled drums", "synth lead", "vinyl scratches"],
        weights: weights(0.9, 0.4, 0.3, 0.6, 0.7),
        electronic: 0.8,
    },
    GenreInfo {
        key: "trap",
        bpm: 140,
        moods: &["icy", "menacing", "hazy", "spacious"],
        instruments: &["808 sub bass", "hi-hat rolls", "dark synth pads"],
        weights: weights(0.8, 0.5, 0.2, 0.7, 0.9),
        electronic: 0.95,
    },
    GenreInfo {
        key: "house",
        bpm: 124,
        moods: &["euphoric", "pulsing", "sleek", "hands-up"],
        instruments: &["four-on-the-floor kick", "synth bass", "piano stabs"],
        weights: weights(0.5, 0.7, 0.4, 0.6, 0.8),
        electronic: 0.9,
    },
    GenreInfo {
        key: "techno",
        bpm: 130,
        moods: &["hypnotic", "industrial", "relentless", "cavernous"],
        instruments: &["analog kick", "modular synth", "acid bass"],
        weights: weights(0.1, 0.8, 0.3, 0.7, 0.9),
        electronic: 1.0,
    },
    GenreInfo {
        key: "ambient",
        bpm: 70,
        moods: &["weightless", "meditative", "vast", "glacial"],
        instruments: &["synth pads", "field recordings", "felted piano"],
        weights: weights(0.0, 0.9, 0.6, 0.2, 0.1),
        electronic: 0.7,
    },
    GenreInfo {
        key: "lofi",
        bpm: 82,
        moods: &["cozy", "dusty", "nostalgic", "rainy-day"],
        instruments: &["mellow piano", "vinyl drums", "muted bass"],
        weights: weights(0.2, 0.6, 0.5, 0.2, 0.4),
        electronic: 0.5,
    },
    GenreInfo {
        key: "drum and bass",
        bpm: 174,
        moods: &["kinetic", "dark", "soaring", "breathless"],
        instruments: &["chopped breakbeats", "reese bass", "atmospheric pads"],
        weights: weights(0.3, 0.7, 0.3, 0.8, 1.0),
        electronic: 0.95,
    },
    GenreInfo {
        key: "synthwave",
        bpm: 105,
        moods: &["neon", "nostalgic", "cinematic", "midnight"],
        instruments: &["analog synths", "gated reverb drums", "fm bass"],
        weights: weights(0.4, 0.7, 0.5, 0.5, 0.6),
        electronic: 0.9,
    },
];

/// Default weight vector applied to genres missing from the registry.
pub const DEFAULT_WEIGHTS: DomainWeights = weights(0.6, 0.5, 0.4, 0.5, 0.5);

fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace('-', " ")
}

/// Looks up a registry entry by free-text genre mention.
///
/// Matching is case-insensitive and treats hyphens as spaces
/// ("Hip-Hop" resolves to "hip hop"). Unknown mentions return `None`.
pub fn lookup(raw: &str) -> Option<&'static GenreInfo> {
    let normalized = normalize(raw);
    GENRES.iter().find(|g| g.key == normalized)
}

/// Canonical key for a free-text genre mention, if registered.
pub fn canonical(raw: &str) -> Option<&'static str> {
    lookup(raw).map(|g| g.key)
}

/// Registry entry for a canonical key, falling back to [`DEFAULT_GENRE`].
pub fn info_or_default(key: &str) -> &'static GenreInfo {
    lookup(key).unwrap_or_else(|| {
        lookup(DEFAULT_GENRE).expect("default genre must be registered")
    })
}

/// Weight vector for a genre, falling back to [`DEFAULT_WEIGHTS`] for
/// unmapped mentions.
pub fn weights_for(raw: &str) -> DomainWeights {
    lookup(raw).map(|g| g.weights).unwrap_or(DEFAULT_WEIGHTS)
}

/// All canonical genre keys in registry order.
pub fn all_keys() -> Vec<&'static str> {
    GENRES.iter().map(|g| g.key).collect()
}
