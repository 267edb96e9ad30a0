//! Exact semantic search with a similarity floor and metadata filters.

use semrank_core::errors::SemrankResult;
use semrank_core::models::{MetadataFilter, ScanPredicate};
use semrank_core::validation;
use semrank_scoring::ranked_order;
use tracing::{debug, info};

use crate::hits::SearchHit;
use crate::pipeline::RetrievalPipeline;

impl RetrievalPipeline<'_> {
    /// Top-`k` documents with `cosine_similarity >= min_similarity` that
    /// satisfy every filter.
    ///
    /// With an ANN index wired, the scan is restricted to the index's
    /// `k * ann_overfetch` nearest ids. Results can then miss documents the
    /// index failed to surface; an exact scan never does.
    pub fn semantic_search(
        &self,
        query: &[f32],
        k: usize,
        min_similarity: f64,
        filters: &[MetadataFilter],
    ) -> SemrankResult<Vec<SearchHit>> {
        validation::require_positive("k", k)?;
        validation::require_finite("min_similarity", min_similarity)?;
        self.check_query(query)?;

        let mut predicate = ScanPredicate::with_filters(filters.iter().cloned());
        if let Some(ann) = self.ann {
            let fetch = k.saturating_mul(self.config.ann_overfetch.max(1));
            let neighbors = ann.query(query, fetch)?;
            debug!(requested = fetch, returned = neighbors.len(), "ann prefilter");
            if neighbors.is_empty() {
                return Ok(Vec::new());
            }
            predicate = predicate.restrict_to_ids(neighbors.into_iter().map(|(id, _)| id));
        }

        let mut hits: Vec<SearchHit> = self
            .scan_scored(query, &predicate)?
            .into_iter()
            .filter(|c| c.score >= min_similarity)
            .map(SearchHit::from)
            .collect();
        hits.sort_by(|a, b| ranked_order(a.similarity, &a.id, b.similarity, &b.id));
        hits.truncate(k);

        info!(k, min_similarity, returned = hits.len(), "semantic search complete");
        Ok(hits)
    }
}
