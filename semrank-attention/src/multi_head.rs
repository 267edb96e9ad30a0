//! Multi-head aggregation over contiguous vector segments.

use rayon::prelude::*;

use semrank_core::errors::{SemrankError, SemrankResult};
use semrank_core::models::Document;
use semrank_core::validation;
use semrank_scoring::{ranked_order, segment_similarities};
use tracing::info;

use crate::aggregator::AttentionAggregator;
use crate::hits::MultiHeadHit;

fn score(
    query: &[f32],
    doc: &Document,
    num_heads: usize,
    head_dim: usize,
) -> SemrankResult<Vec<f64>> {
    segment_similarities(query, doc.embedding().unwrap_or(&[]), num_heads, head_dim)
}

impl AttentionAggregator<'_> {
    /// Split every vector into `num_heads` segments of `head_dim`, score each
    /// segment against the matching query segment, and rank by the mean.
    ///
    /// `num_heads * head_dim` must equal the corpus dimension.
    pub fn multi_head_attention_aggregate(
        &self,
        query: &[f32],
        num_heads: usize,
        head_dim: usize,
        limit: usize,
    ) -> SemrankResult<Vec<MultiHeadHit>> {
        validation::require_positive("num_heads", num_heads)?;
        validation::require_positive("head_dim", head_dim)?;
        validation::require_positive("limit", limit)?;
        let width = num_heads.saturating_mul(head_dim);
        if width != self.dimensions {
            return Err(SemrankError::DimensionMismatch {
                expected: self.dimensions,
                actual: width,
            });
        }
        self.check_query(query)?;

        let corpus = self.corpus()?;
        let head_scores: Vec<Vec<f64>> = if corpus.len() >= self.parallel_threshold.max(1) {
            corpus
                .par_iter()
                .map(|d| score(query, d, num_heads, head_dim))
                .collect::<SemrankResult<_>>()?
        } else {
            corpus
                .iter()
                .map(|d| score(query, d, num_heads, head_dim))
                .collect::<SemrankResult<_>>()?
        };

        let mut hits: Vec<MultiHeadHit> = corpus
            .into_iter()
            .zip(head_scores)
            .map(|(doc, head_scores)| MultiHeadHit {
                mean_score: head_scores.iter().sum::<f64>() / num_heads as f64,
                head_scores,
                id: doc.id,
                content: doc.content,
            })
            .collect();
        hits.sort_by(|a, b| ranked_order(a.mean_score, &a.id, b.mean_score, &b.id));
        hits.truncate(limit);

        info!(num_heads, head_dim, returned = hits.len(), "multi-head aggregation complete");
        Ok(hits)
    }
}
