//! Corpus-wide attention for a query vector.

use semrank_core::errors::SemrankResult;
use semrank_core::models::Document;
use semrank_core::validation;
use semrank_scoring::ranked_order;
use tracing::info;

use crate::aggregator::AttentionAggregator;
use crate::hits::AttentionHit;
use crate::partition;

impl AttentionAggregator<'_> {
    /// Softmax of `similarity / temperature` over the whole corpus, top
    /// `limit` by weight.
    ///
    /// The distribution sums to 1 over the corpus, so the returned subset
    /// generally sums to less.
    pub fn attention_scores(
        &self,
        query: &[f32],
        limit: usize,
        temperature: f64,
    ) -> SemrankResult<Vec<AttentionHit>> {
        validation::require_positive("limit", limit)?;
        validation::require_positive_f64("temperature", temperature)?;
        self.check_query(query)?;

        let corpus = self.corpus()?;
        let targets: Vec<&Document> = corpus.iter().collect();
        let partition = partition::attend(query, &targets, temperature, self.parallel_threshold)?;

        let mut hits: Vec<AttentionHit> = corpus
            .into_iter()
            .zip(partition.similarities.into_iter().zip(partition.weights))
            .map(|(doc, (similarity, weight))| AttentionHit {
                id: doc.id,
                content: doc.content,
                similarity,
                weight,
            })
            .collect();
        hits.sort_by(|a, b| ranked_order(a.weight, &a.id, b.weight, &b.id));
        hits.truncate(limit);

        info!(limit, temperature, returned = hits.len(), "attention scores complete");
        Ok(hits)
    }
}
