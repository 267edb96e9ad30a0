//! # semrank-diversity
//!
//! Maximal Marginal Relevance (MMR): greedily pick the candidate maximizing
//! `lambda * relevance - (1 - lambda) * max_similarity_to_selected`.
//! `lambda = 1` is plain relevance ranking; `lambda = 0` is pure diversity.

pub mod selection;
pub mod selector;

use serde::Serialize;

pub use selection::{select, Pick, SelectionState};
pub use selector::DiversitySelector;

/// One MMR pick, in selection order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MmrHit {
    pub id: String,
    pub content: String,
    /// Cosine similarity to the query.
    pub relevance: f64,
    /// Highest similarity to anything picked earlier; 0 for the first pick.
    pub max_similarity_to_selected: f64,
    pub mmr_score: f64,
}
