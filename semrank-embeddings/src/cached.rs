//! Caching wrapper around any embedder.

use tracing::debug;

use semrank_core::traits::IEmbedder;
use semrank_core::SemrankResult;

use crate::cache::EmbeddingCache;

/// Serves repeated texts from an [`EmbeddingCache`] before calling `inner`.
pub struct CachedEmbedder<E: IEmbedder> {
    inner: E,
    cache: EmbeddingCache,
}

impl<E: IEmbedder> CachedEmbedder<E> {
    pub fn new(inner: E, max_entries: u64) -> Self {
        Self {
            inner,
            cache: EmbeddingCache::new(max_entries),
        }
    }

    pub fn cache(&self) -> &EmbeddingCache {
        &self.cache
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: IEmbedder> IEmbedder for CachedEmbedder<E> {
    fn embed(&self, text: &str) -> SemrankResult<Vec<f32>> {
        let key = EmbeddingCache::key(self.inner.model_name(), text);
        if let Some(hit) = self.cache.get(&key) {
            debug!(model = self.inner.model_name(), "embedding cache hit");
            return Ok(hit);
        }
        let vector = self.inner.embed(text)?;
        self.cache.insert(key, vector.clone());
        Ok(vector)
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}
