//! Temporal search: similarity blended with exponential recency decay.

use chrono::{DateTime, Utc};
use semrank_core::constants::SECONDS_PER_DAY;
use semrank_core::errors::SemrankResult;
use semrank_core::models::ScanPredicate;
use semrank_core::validation;
use semrank_scoring::ranked_order;
use tracing::info;

use crate::hits::TemporalHit;
use crate::pipeline::RetrievalPipeline;

/// Recency factor: `e^(-age_seconds / (decay_days * 86400))`.
///
/// Documents stamped in the future have age 0 and recency 1.0.
pub fn recency(created_at: DateTime<Utc>, now: DateTime<Utc>, decay_days: f64) -> f64 {
    let age_seconds = (now - created_at).num_seconds().max(0) as f64;
    (-age_seconds / (decay_days * SECONDS_PER_DAY)).exp()
}

impl RetrievalPipeline<'_> {
    /// Temporal search with ages measured against the wall clock.
    pub fn temporal_search(
        &self,
        query: &[f32],
        limit: usize,
        decay_days: f64,
        time_weight: f64,
    ) -> SemrankResult<Vec<TemporalHit>> {
        self.temporal_search_at(query, limit, decay_days, time_weight, Utc::now())
    }

    /// `combined = (1 - time_weight) * similarity + time_weight * recency`,
    /// with ages measured against `now`.
    pub fn temporal_search_at(
        &self,
        query: &[f32],
        limit: usize,
        decay_days: f64,
        time_weight: f64,
        now: DateTime<Utc>,
    ) -> SemrankResult<Vec<TemporalHit>> {
        validation::require_positive("limit", limit)?;
        validation::require_positive_f64("decay_days", decay_days)?;
        validation::require_unit_interval("time_weight", time_weight)?;
        self.check_query(query)?;

        let mut hits: Vec<TemporalHit> = self
            .scan_scored(query, &ScanPredicate::all())?
            .into_iter()
            .map(|c| {
                let recency = recency(c.document.created_at, now, decay_days);
                TemporalHit {
                    combined_score: (1.0 - time_weight) * c.score + time_weight * recency,
                    similarity: c.score,
                    recency,
                    created_at: c.document.created_at,
                    id: c.document.id,
                    content: c.document.content,
                }
            })
            .collect();
        hits.sort_by(|a, b| ranked_order(a.combined_score, &a.id, b.combined_score, &b.id));
        hits.truncate(limit);

        info!(limit, decay_days, time_weight, returned = hits.len(), "temporal search complete");
        Ok(hits)
    }
}
