//! Decision-record side channel.
//!
//! When a refinement request carries an explicit style change-set, the
//! router emits one record per considered field for observability. Records
//! never alter control flow.

use serde::{Deserialize, Serialize};

/// One routing decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Decision domain ("style", "lyrics", "routing").
    pub domain: String,
    /// The key decided on (field name, mode name).
    pub key: String,
    /// The branch taken ("regenerate", "keep", ...).
    pub branch: String,
    /// Human-readable rationale.
    pub rationale: String,
}

impl DecisionRecord {
    pub fn new(
        domain: impl Into<String>,
        key: impl Into<String>,
        branch: impl Into<String>,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            key: key.into(),
            branch: branch.into(),
            rationale: rationale.into(),
        }
    }
}
