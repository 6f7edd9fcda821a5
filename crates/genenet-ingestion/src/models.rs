//! Data models for edge ingestion.

use serde::{Deserialize, Serialize};

/// One pairwise association as reported upstream.
/// Endpoints and score are passed through untouched; self-loops are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub score: f64,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, score: f64) -> Self {
        Self { source: source.into(), target: target.into(), score }
    }
}

/// Upstream interaction record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionSourceKind {
    StringDb,
}

impl InteractionSourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionSourceKind::StringDb => "string-db",
        }
    }
}

/// The subset of a STRING `network` record this crate reads.
/// STRING also sends stringId_A/B, ncbiTaxonId and per-channel scores,
/// which are ignored.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StringInteraction {
    #[serde(rename = "preferredName_A")]
    pub preferred_name_a: String,
    #[serde(rename = "preferredName_B")]
    pub preferred_name_b: String,
    pub score: f64,
}

impl From<StringInteraction> for Edge {
    fn from(r: StringInteraction) -> Self {
        Edge::new(r.preferred_name_a, r.preferred_name_b, r.score)
    }
}
