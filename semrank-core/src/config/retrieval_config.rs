use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Similarity floor applied by the RAG re-rank stage.
    pub min_similarity: f64,
    /// ANN over-fetch multiplier used when semantic search goes through the index.
    pub ann_overfetch: usize,
    /// Hybrid search admits a document when its similarity exceeds this floor.
    pub hybrid_similarity_floor: f64,
    /// Default vector weight for hybrid search.
    pub vector_weight: f64,
    /// Default keyword weight for hybrid search.
    pub keyword_weight: f64,
    /// Default recency decay constant (days).
    pub decay_days: f64,
    /// Default recency weight for temporal search.
    pub time_weight: f64,
    /// Cluster search discards query/document pairs at or below this similarity.
    pub cluster_min_similarity: f64,
    /// Corpus size from which per-document scoring fans out over rayon.
    pub parallel_threshold: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            min_similarity: defaults::DEFAULT_MIN_SIMILARITY,
            ann_overfetch: defaults::DEFAULT_ANN_OVERFETCH,
            hybrid_similarity_floor: defaults::DEFAULT_HYBRID_SIMILARITY_FLOOR,
            vector_weight: defaults::DEFAULT_VECTOR_WEIGHT,
            keyword_weight: defaults::DEFAULT_KEYWORD_WEIGHT,
            decay_days: defaults::DEFAULT_DECAY_DAYS,
            time_weight: defaults::DEFAULT_TIME_WEIGHT,
            cluster_min_similarity: defaults::DEFAULT_CLUSTER_MIN_SIMILARITY,
            parallel_threshold: defaults::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}
