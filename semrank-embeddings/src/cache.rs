//! Bounded query-embedding cache on moka.
//!
//! Keys are blake3 digests over `model`, a zero byte, then the text, so two
//! models never share entries.

use std::time::Duration;

use moka::sync::Cache;

/// Entries unused for this long are evicted.
pub const DEFAULT_IDLE: Duration = Duration::from_secs(60 * 60);
/// Entries older than this are evicted regardless of use.
pub const DEFAULT_LIVE: Duration = Duration::from_secs(24 * 60 * 60);

pub struct EmbeddingCache {
    entries: Cache<String, Vec<f32>>,
}

impl EmbeddingCache {
    /// At most `max_entries` vectors with the default idle and live limits.
    pub fn new(max_entries: u64) -> Self {
        Self::with_expiry(max_entries, DEFAULT_IDLE, DEFAULT_LIVE)
    }

    pub fn with_expiry(max_entries: u64, idle: Duration, live: Duration) -> Self {
        Self {
            entries: Cache::builder()
                .max_capacity(max_entries)
                .time_to_idle(idle)
                .time_to_live(live)
                .build(),
        }
    }

    pub fn key(model: &str, text: &str) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(model.as_bytes());
        hasher.update(&[0]);
        hasher.update(text.as_bytes());
        hasher.finalize().to_hex().to_string()
    }

    pub fn get(&self, key: &str) -> Option<Vec<f32>> {
        self.entries.get(key)
    }

    pub fn insert(&self, key: String, embedding: Vec<f32>) {
        self.entries.insert(key, embedding);
    }

    /// Approximate entry count; moka applies pending writes lazily.
    pub fn len(&self) -> u64 {
        self.entries.run_pending_tasks();
        self.entries.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.invalidate_all();
    }
}
