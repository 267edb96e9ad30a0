//! Hybrid search: vector similarity blended with keyword relevance.

use semrank_core::errors::SemrankResult;
use semrank_core::models::ScanPredicate;
use semrank_core::validation;
use semrank_scoring::ranked_order;
use tracing::{debug, info, warn};

use crate::hits::HybridHit;
use crate::pipeline::RetrievalPipeline;

impl RetrievalPipeline<'_> {
    /// `combined = vector_weight * similarity + keyword_weight * relevance`.
    ///
    /// A document qualifies when its similarity exceeds the configured
    /// `hybrid_similarity_floor` or the keyword scorer reports a match.
    /// With no keyword scorer wired, relevance is 0 and nothing matches.
    pub fn hybrid_search(
        &self,
        query: &[f32],
        keyword_query: &str,
        limit: usize,
        vector_weight: f64,
        keyword_weight: f64,
    ) -> SemrankResult<Vec<HybridHit>> {
        validation::require_positive("limit", limit)?;
        validation::require_non_negative("vector_weight", vector_weight)?;
        validation::require_non_negative("keyword_weight", keyword_weight)?;
        self.check_query(query)?;

        if self.keyword.is_none() {
            warn!("no keyword scorer configured, hybrid search ranks on vectors only");
        }
        let floor = self.config.hybrid_similarity_floor;
        let candidates = self.scan_scored(query, &ScanPredicate::all())?;
        let scanned = candidates.len();

        let mut hits: Vec<HybridHit> = candidates
            .into_iter()
            .filter_map(|c| {
                let keyword_match = self
                    .keyword
                    .is_some_and(|k| k.matches(keyword_query, &c.document));
                if c.score <= floor && !keyword_match {
                    return None;
                }
                let keyword_relevance = self
                    .keyword
                    .map_or(0.0, |k| k.relevance(keyword_query, &c.document));
                Some(HybridHit {
                    combined_score: vector_weight * c.score + keyword_weight * keyword_relevance,
                    vector_similarity: c.score,
                    keyword_relevance,
                    keyword_match,
                    id: c.document.id,
                    content: c.document.content,
                    metadata: c.document.metadata,
                })
            })
            .collect();
        debug!(scanned, qualified = hits.len(), "hybrid qualification");

        hits.sort_by(|a, b| ranked_order(a.combined_score, &a.id, b.combined_score, &b.id));
        hits.truncate(limit);
        info!(limit, returned = hits.len(), "hybrid search complete");
        Ok(hits)
    }
}
