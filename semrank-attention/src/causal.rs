//! Causal attention: sources attend only to documents no newer than themselves.

use semrank_core::errors::SemrankResult;
use semrank_core::models::Document;
use semrank_core::validation;
use tracing::info;

use crate::aggregator::{resolve, AttentionAggregator};
use crate::hits::AttentionEdge;

impl AttentionAggregator<'_> {
    /// Self-attention with targets restricted to `created_at <= source.created_at`.
    /// Documents sharing the source's timestamp, the source itself included,
    /// are valid targets.
    pub fn causal_attention(
        &self,
        source_ids: &[String],
        temperature: f64,
    ) -> SemrankResult<Vec<AttentionEdge>> {
        validation::require_positive_f64("temperature", temperature)?;

        let corpus = self.corpus()?;
        let sources = resolve(source_ids, &corpus)?;

        let mut edges = Vec::new();
        for &s in &sources {
            let source = &corpus[s];
            let targets: Vec<&Document> = corpus
                .iter()
                .filter(|d| d.created_at <= source.created_at)
                .collect();
            let partition = self.attend(source, &targets, temperature)?;
            edges.extend(self.pruned_edges(source, &targets, &partition, None));
        }

        info!(sources = sources.len(), edges = edges.len(), "causal attention complete");
        Ok(edges)
    }
}

#[cfg(test)]
mod tests {
    use semrank_core::config::AttentionConfig;
    use test_fixtures::{doc, planar, store_from};

    use crate::AttentionAggregator;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn targets_of(agg: &AttentionAggregator<'_>, source: &str) -> Vec<String> {
        let mut t: Vec<String> = agg
            .causal_attention(&ids(&[source]), 1.0)
            .unwrap()
            .into_iter()
            .map(|e| e.target_id)
            .collect();
        t.sort();
        t
    }

    #[test]
    fn earliest_document_attends_only_to_itself() {
        let store = store_from(
            2,
            vec![
                doc("D1", planar(0.0, 2), 10),
                doc("D2", planar(30.0, 2), 20),
                doc("D3", planar(60.0, 2), 30),
            ],
        );
        let agg = AttentionAggregator::new(store.as_ref(), 2, AttentionConfig::default());
        assert_eq!(targets_of(&agg, "D1"), vec!["D1"]);
        assert_eq!(targets_of(&agg, "D2"), vec!["D1", "D2"]);
        assert_eq!(targets_of(&agg, "D3"), vec!["D1", "D2", "D3"]);

        let only = agg.causal_attention(&ids(&["D1"]), 1.0).unwrap();
        assert!((only[0].weight - 1.0).abs() < 1e-12);
        assert!(only[0].head.is_none());
    }

    #[test]
    fn equal_timestamps_are_visible() {
        let store = store_from(
            2,
            vec![doc("a", planar(0.0, 2), 5), doc("b", planar(10.0, 2), 5)],
        );
        let agg = AttentionAggregator::new(store.as_ref(), 2, AttentionConfig::default());
        assert_eq!(targets_of(&agg, "a"), vec!["a", "b"]);
    }
}
