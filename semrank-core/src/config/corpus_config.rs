use serde::{Deserialize, Serialize};

use super::defaults;

/// Corpus-wide invariants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Embedding dimension shared by every document and query.
    pub dimensions: usize,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            dimensions: defaults::DEFAULT_DIMENSIONS,
        }
    }
}
