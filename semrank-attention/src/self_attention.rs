//! Self-attention: stored documents attending over the whole corpus.

use semrank_core::errors::SemrankResult;
use semrank_core::models::Document;
use semrank_core::validation;
use tracing::info;

use crate::aggregator::{resolve, AttentionAggregator};
use crate::hits::AttentionEdge;

impl AttentionAggregator<'_> {
    /// For each source and each head in `[1, head_count]`, a softmax over the
    /// whole corpus (the source included), pruned at the configured threshold.
    ///
    /// Heads are positional slots without learned projections, so every head
    /// of a source carries the same distribution. Edges are grouped by source
    /// in input order, then by head, heaviest target first.
    pub fn self_attention(
        &self,
        source_ids: &[String],
        head_count: usize,
        temperature: f64,
    ) -> SemrankResult<Vec<AttentionEdge>> {
        validation::require_positive("head_count", head_count)?;
        validation::require_positive_f64("temperature", temperature)?;

        let corpus = self.corpus()?;
        let sources = resolve(source_ids, &corpus)?;
        let targets: Vec<&Document> = corpus.iter().collect();

        let mut edges = Vec::new();
        for &s in &sources {
            let source = &corpus[s];
            let partition = self.attend(source, &targets, temperature)?;
            let head_edges = self.pruned_edges(source, &targets, &partition, None);
            for head in 1..=head_count {
                edges.extend(head_edges.iter().cloned().map(|mut e| {
                    e.head = Some(head);
                    e
                }));
            }
        }

        info!(sources = sources.len(), head_count, edges = edges.len(), "self attention complete");
        Ok(edges)
    }
}
