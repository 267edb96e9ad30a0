use serde::{Deserialize, Serialize};

use super::defaults;

/// MMR configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiversityConfig {
    /// Default relevance/diversity trade-off in [0, 1].
    pub lambda: f64,
}

impl Default for DiversityConfig {
    fn default() -> Self {
        Self {
            lambda: defaults::DEFAULT_MMR_LAMBDA,
        }
    }
}
