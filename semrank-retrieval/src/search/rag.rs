//! Coarse-to-fine retrieval: approximate candidates, exact re-score.

use std::collections::HashMap;

use semrank_core::errors::SemrankResult;
use semrank_core::models::ScanPredicate;
use semrank_core::validation;
use semrank_scoring::ranked_order;
use tracing::{debug, info, warn};

use crate::hits::RagHit;
use crate::pipeline::RetrievalPipeline;

impl RetrievalPipeline<'_> {
    /// Stage 1 asks the ANN index for `coarse_limit` candidates (an exact
    /// top-`coarse_limit` scan when no index is wired). Stage 2 re-scores
    /// them exactly, keeps those at or above the configured
    /// `min_similarity`, and returns at most `final_limit`.
    pub fn rag_retrieve(
        &self,
        query: &[f32],
        coarse_limit: usize,
        final_limit: usize,
    ) -> SemrankResult<Vec<RagHit>> {
        validation::require_positive("coarse_limit", coarse_limit)?;
        validation::require_positive("final_limit", final_limit)?;
        self.check_query(query)?;

        let mut candidates = match self.ann {
            Some(ann) => {
                let mut neighbors = ann.query(query, coarse_limit)?;
                neighbors.truncate(coarse_limit);
                debug!(coarse = neighbors.len(), "rag stage 1 via ann");
                if neighbors.is_empty() {
                    return Ok(Vec::new());
                }
                let distances: HashMap<String, f64> = neighbors.into_iter().collect();
                let predicate = ScanPredicate::all().restrict_to_ids(distances.keys().cloned());
                self.scan_scored(query, &predicate)?
                    .into_iter()
                    .map(|c| {
                        let approx = distances.get(c.id()).copied();
                        (c, approx)
                    })
                    .collect::<Vec<_>>()
            }
            None => {
                warn!("no ann index wired; rag stage 1 falls back to an exact scan");
                let mut scored = self.scan_scored(query, &ScanPredicate::all())?;
                scored.sort_by(|a, b| ranked_order(a.score, a.id(), b.score, b.id()));
                scored.truncate(coarse_limit);
                scored.into_iter().map(|c| (c, None)).collect()
            }
        };

        let floor = self.config.min_similarity;
        candidates.retain(|(c, _)| c.score >= floor);
        candidates.sort_by(|(a, _), (b, _)| ranked_order(a.score, a.id(), b.score, b.id()));
        candidates.truncate(final_limit);

        let hits: Vec<RagHit> = candidates
            .into_iter()
            .map(|(c, approx_distance)| RagHit {
                similarity: c.score,
                approx_distance,
                id: c.document.id,
                content: c.document.content,
                metadata: c.document.metadata,
            })
            .collect();
        info!(coarse_limit, final_limit, returned = hits.len(), "rag retrieval complete");
        Ok(hits)
    }
}
