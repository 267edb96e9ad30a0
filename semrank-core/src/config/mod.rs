pub mod attention_config;
pub mod corpus_config;
pub mod defaults;
pub mod diversity_config;
pub mod embedding_config;
pub mod observability_config;
pub mod retrieval_config;

pub use attention_config::AttentionConfig;
pub use corpus_config::CorpusConfig;
pub use diversity_config::DiversityConfig;
pub use embedding_config::EmbeddingConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{SemrankError, SemrankResult};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SemrankConfig {
    pub corpus: CorpusConfig,
    pub retrieval: RetrievalConfig,
    pub attention: AttentionConfig,
    pub diversity: DiversityConfig,
    pub embedding: EmbeddingConfig,
    pub observability: ObservabilityConfig,
}

impl SemrankConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml(source: &str) -> SemrankResult<Self> {
        toml::from_str(source).map_err(|e| SemrankError::Config(e.to_string()))
    }

    /// Load and parse a TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> SemrankResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| SemrankError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&source)
    }
}
