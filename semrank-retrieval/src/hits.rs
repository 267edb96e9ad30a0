//! Result records returned by the retrieval pipeline.

use chrono::{DateTime, Utc};
use serde::Serialize;

use semrank_core::models::{Candidate, Metadata};

/// A semantic search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub id: String,
    pub content: String,
    pub metadata: Metadata,
    pub similarity: f64,
}

impl From<Candidate> for SearchHit {
    fn from(candidate: Candidate) -> Self {
        Self {
            id: candidate.document.id,
            content: candidate.document.content,
            metadata: candidate.document.metadata,
            similarity: candidate.score,
        }
    }
}

/// A coarse-to-fine retrieval result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RagHit {
    pub id: String,
    pub content: String,
    pub metadata: Metadata,
    /// Distance reported by the ANN index in stage 1. `None` when stage 1
    /// fell back to an exact scan.
    pub approx_distance: Option<f64>,
    /// Exact cosine similarity from stage 2.
    pub similarity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HybridHit {
    pub id: String,
    pub content: String,
    pub metadata: Metadata,
    pub vector_similarity: f64,
    pub keyword_relevance: f64,
    pub keyword_match: bool,
    pub combined_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemporalHit {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub similarity: f64,
    /// `exp(-age / decay)`, in (0, 1].
    pub recency: f64,
    pub combined_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterHit {
    pub id: String,
    pub content: String,
    pub metadata: Metadata,
    /// Aggregate over the query vectors whose similarity passed the floor.
    pub score: f64,
    pub matched_queries: usize,
}
