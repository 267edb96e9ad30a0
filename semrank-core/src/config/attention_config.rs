use serde::{Deserialize, Serialize};

use super::defaults;

/// Attention aggregator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AttentionConfig {
    /// Softmax temperature used where an operation takes none explicitly (flash search).
    pub temperature: f64,
    /// Weights at or below this value are pruned from self/cross/causal output.
    pub prune_threshold: f64,
    /// Default head count for self-attention.
    pub head_count: usize,
    /// Default block size for flash search.
    pub block_size: usize,
}

impl Default for AttentionConfig {
    fn default() -> Self {
        Self {
            temperature: defaults::DEFAULT_TEMPERATURE,
            prune_threshold: defaults::DEFAULT_PRUNE_THRESHOLD,
            head_count: defaults::DEFAULT_HEAD_COUNT,
            block_size: defaults::DEFAULT_BLOCK_SIZE,
        }
    }
}
