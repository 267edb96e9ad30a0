//! Block-wise ("flash") attention search.
//!
//! The corpus is ordered by `(created_at, id)` and cut into fixed-size
//! blocks. Each block is normalized on its own, so weights are only
//! comparable to the corpus-wide softmax when everything fits in one block.

use semrank_core::errors::SemrankResult;
use semrank_core::models::{chronological_order, Candidate};
use semrank_core::validation;
use semrank_scoring::{ranked_order, similarities_to, softmax_with_temperature};
use tracing::{debug, info};

use crate::aggregator::AttentionAggregator;
use crate::hits::FlashHit;

impl AttentionAggregator<'_> {
    /// Block-local softmax at the configured temperature, ranked by weight
    /// across all blocks. Each hit carries the block it was normalized in.
    pub fn flash_attention_search(
        &self,
        query: &[f32],
        block_size: usize,
        limit: usize,
    ) -> SemrankResult<Vec<FlashHit>> {
        validation::require_positive("block_size", block_size)?;
        validation::require_positive("limit", limit)?;
        let temperature = self.config.temperature;
        validation::require_positive_f64("temperature", temperature)?;
        self.check_query(query)?;

        let mut corpus = self.corpus()?;
        corpus.sort_by(chronological_order);
        let similarities = similarities_to(query, &corpus, self.parallel_threshold)?;

        let mut candidates: Vec<Candidate> = corpus
            .into_iter()
            .zip(similarities)
            .map(|(doc, similarity)| Candidate::new(doc, similarity))
            .collect();
        let blocks = candidates.len().div_ceil(block_size);
        for (block_id, block) in candidates.chunks_mut(block_size).enumerate() {
            let similarities: Vec<f64> = block.iter().map(|c| c.score).collect();
            let weights = softmax_with_temperature(&similarities, temperature);
            for (candidate, weight) in block.iter_mut().zip(weights) {
                candidate.attention_weight = Some(weight);
                candidate.block_id = Some(block_id);
            }
        }
        debug!(blocks, block_size, "flash blocks normalized");

        let mut hits: Vec<FlashHit> = candidates
            .into_iter()
            .map(|c| FlashHit {
                weight: c.attention_weight.unwrap_or(0.0),
                block_id: c.block_id.unwrap_or(0),
                similarity: c.score,
                id: c.document.id,
                content: c.document.content,
            })
            .collect();
        hits.sort_by(|a, b| ranked_order(a.weight, &a.id, b.weight, &b.id));
        hits.truncate(limit);

        info!(block_size, limit, returned = hits.len(), "flash attention search complete");
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use semrank_core::config::AttentionConfig;
    use semrank_core::constants::SOFTMAX_TOLERANCE;
    use test_fixtures::{doc, planar, store_from};

    use crate::AttentionAggregator;

    #[test]
    fn blocks_follow_creation_order() {
        // Inserted out of order; block assignment must follow timestamps.
        let store = store_from(
            2,
            vec![
                doc("late", planar(0.0, 2), 300),
                doc("early", planar(0.0, 2), 100),
                doc("middle", planar(90.0, 2), 200),
                doc("tie-b", planar(45.0, 2), 400),
                doc("tie-a", planar(45.0, 2), 400),
            ],
        );
        let agg = AttentionAggregator::new(store.as_ref(), 2, AttentionConfig::default());
        let hits = agg.flash_attention_search(&[1.0, 0.0], 2, 10).unwrap();
        let block = |id: &str| hits.iter().find(|h| h.id == id).unwrap().block_id;

        assert_eq!(block("early"), 0);
        assert_eq!(block("middle"), 0);
        assert_eq!(block("late"), 1);
        assert_eq!(block("tie-a"), 1);
        assert_eq!(block("tie-b"), 2);
        // Alone in its block, so it takes the whole mass.
        assert!((hits.iter().find(|h| h.id == "tie-b").unwrap().weight - 1.0).abs() < 1e-12);
    }

    #[test]
    fn each_block_sums_to_one() {
        let store = store_from(
            2,
            (0..10).map(|i| doc(&format!("d{i}"), planar(i as f64 * 20.0, 2), i)),
        );
        let agg = AttentionAggregator::new(store.as_ref(), 2, AttentionConfig::default());
        let hits = agg.flash_attention_search(&[1.0, 0.0], 4, 10).unwrap();
        for block in 0..3 {
            let sum: f64 = hits.iter().filter(|h| h.block_id == block).map(|h| h.weight).sum();
            assert!((sum - 1.0).abs() < SOFTMAX_TOLERANCE, "block {block} sums to {sum}");
        }
    }

    #[test]
    fn zero_block_size_is_invalid() {
        let store = store_from(2, vec![doc("a", planar(0.0, 2), 0)]);
        let agg = AttentionAggregator::new(store.as_ref(), 2, AttentionConfig::default());
        assert!(agg.flash_attention_search(&[1.0, 0.0], 0, 1).is_err());
    }
}
