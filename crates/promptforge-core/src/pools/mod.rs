//! Static tag vocabularies.
//!
//! Pools are plain immutable data, kept strictly separate from selection
//! logic so completeness can be asserted independent of sampling behavior.
//! A domain's full tag set is the union of its categories.

pub mod dynamic;
pub mod harmonic;
pub mod recording;
pub mod spatial;
pub mod temporal;
pub mod texture;
pub mod vocal;

use crate::genre::DomainWeights;

/// The five weighted tag domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagDomain {
    Vocal,
    Spatial,
    Harmonic,
    Dynamic,
    Temporal,
}

impl TagDomain {
    /// All weighted domains, in sampling order.
    pub const ALL: &'static [TagDomain] = &[
        TagDomain::Vocal,
        TagDomain::Spatial,
        TagDomain::Harmonic,
        TagDomain::Dynamic,
        TagDomain::Temporal,
    ];

    /// The categories making up this domain.
    pub fn categories(self) -> &'static [&'static [&'static str]] {
        match self {
            TagDomain::Vocal => vocal::CATEGORIES,
            TagDomain::Spatial => spatial::CATEGORIES,
            TagDomain::Harmonic => harmonic::CATEGORIES,
            TagDomain::Dynamic => dynamic::CATEGORIES,
            TagDomain::Temporal => temporal::CATEGORIES,
        }
    }

    /// The weight controlling this domain in a genre's weight vector.
    pub fn weight(self, weights: &DomainWeights) -> f64 {
        match self {
            TagDomain::Vocal => weights.vocal,
            TagDomain::Spatial => weights.spatial,
            TagDomain::Harmonic => weights.harmonic,
            TagDomain::Dynamic => weights.dynamic,
            TagDomain::Temporal => weights.temporal,
        }
    }

    /// Stable lowercase name, used in decision traces and CLI output.
    pub fn name(self) -> &'static str {
        match self {
            TagDomain::Vocal => "vocal",
            TagDomain::Spatial => "spatial",
            TagDomain::Harmonic => "harmonic",
            TagDomain::Dynamic => "dynamic",
            TagDomain::Temporal => "temporal",
        }
    }
}

/// Global mood descriptor pool, used alongside each genre's default moods.
pub static MOODS: &[&str] = &[
    "energetic",
    "melancholic",
    "dreamy",
    "triumphant",
    "brooding",
    "serene",
    "restless",
    "bittersweet",
    "defiant",
    "tender",
    "euphoric",
    "haunting",
    "playful",
    "yearning",
    "feverish",
    "weightless",
];

/// Articulation embellishments applied probabilistically per instrument.
pub static ARTICULATIONS: &[&str] = &[
    "muted",
    "staccato",
    "soaring",
    "gritty",
    "warm",
    "shimmering",
    "driving",
    "sparse",
    "layered",
    "syncopated",
];
