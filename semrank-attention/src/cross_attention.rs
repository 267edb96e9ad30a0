//! Cross-attention: query documents attending over the rest of the corpus.

use std::collections::HashSet;

use semrank_core::errors::SemrankResult;
use semrank_core::models::{Document, MetadataFilter, ScanPredicate};
use semrank_core::validation;
use tracing::{debug, info};

use crate::aggregator::{resolve, AttentionAggregator};
use crate::hits::AttentionEdge;

impl AttentionAggregator<'_> {
    /// Each query attends over the keys: every document that is not itself a
    /// query and passes `key_filters`. One softmax per query, then pruning.
    ///
    /// Query ids are resolved against the unfiltered corpus; a query that
    /// fails the filters is still a valid query.
    pub fn cross_attention(
        &self,
        query_ids: &[String],
        key_filters: &[MetadataFilter],
        temperature: f64,
    ) -> SemrankResult<Vec<AttentionEdge>> {
        validation::require_positive_f64("temperature", temperature)?;

        let corpus = self.corpus()?;
        let queries = resolve(query_ids, &corpus)?;
        let query_set: HashSet<&str> = queries.iter().map(|&q| corpus[q].id.as_str()).collect();

        let predicate = ScanPredicate::with_filters(key_filters.iter().cloned());
        let keys: Vec<&Document> = corpus
            .iter()
            .filter(|d| !query_set.contains(d.id.as_str()) && predicate.matches(d))
            .collect();
        debug!(queries = queries.len(), keys = keys.len(), "cross attention keys");

        let mut edges = Vec::new();
        for &q in &queries {
            let source = &corpus[q];
            let partition = self.attend(source, &keys, temperature)?;
            edges.extend(self.pruned_edges(source, &keys, &partition, None));
        }

        info!(queries = queries.len(), edges = edges.len(), "cross attention complete");
        Ok(edges)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use semrank_core::config::AttentionConfig;
    use semrank_core::constants::SOFTMAX_TOLERANCE;
    use semrank_core::models::MetadataFilter;
    use test_fixtures::{doc, planar, store_from};

    use crate::AttentionAggregator;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn store() -> std::sync::Arc<semrank_storage::MemoryStore> {
        store_from(
            2,
            vec![
                doc("q1", planar(0.0, 2), 0).with_metadata("kind", "note"),
                doc("q2", planar(90.0, 2), 1).with_metadata("kind", "note"),
                doc("k1", planar(10.0, 2), 2).with_metadata("kind", "code"),
                doc("k2", planar(80.0, 2), 3).with_metadata("kind", "code"),
                doc("k3", planar(20.0, 2), 4).with_metadata("kind", "note"),
            ],
        )
    }

    #[test]
    fn queries_never_attend_to_queries() {
        let store = store();
        let mut config = AttentionConfig::default();
        config.prune_threshold = 0.0;
        let agg = AttentionAggregator::new(store.as_ref(), 2, config);
        let edges = agg.cross_attention(&ids(&["q1", "q2"]), &[], 1.0).unwrap();

        assert_eq!(edges.len(), 6);
        assert!(edges.iter().all(|e| e.target_id.starts_with('k')));
        for q in ["q1", "q2"] {
            let sum: f64 = edges.iter().filter(|e| e.source_id == q).map(|e| e.weight).sum();
            assert!((sum - 1.0).abs() < SOFTMAX_TOLERANCE);
        }
        assert_eq!(edges[0].source_id, "q1");
        assert_eq!(edges[0].target_id, "k1");
    }

    #[test]
    fn key_filters_restrict_keys() {
        let store = store();
        let agg = AttentionAggregator::new(store.as_ref(), 2, AttentionConfig::default());
        let edges = agg
            .cross_attention(&ids(&["q1"]), &[MetadataFilter::eq("kind", "code")], 1.0)
            .unwrap();
        let targets: Vec<&str> = edges.iter().map(|e| e.target_id.as_str()).collect();
        assert_eq!(targets, vec!["k1", "k2"]);

        let mut subset = BTreeMap::new();
        subset.insert("kind".to_string(), serde_json::json!("note"));
        let edges = agg
            .cross_attention(&ids(&["q1"]), &[MetadataFilter::contains(subset)], 1.0)
            .unwrap();
        let targets: Vec<&str> = edges.iter().map(|e| e.target_id.as_str()).collect();
        assert_eq!(targets, vec!["k3", "q2"]);
        let sum: f64 = edges.iter().map(|e| e.weight).sum();
        assert!((sum - 1.0).abs() < SOFTMAX_TOLERANCE);
        assert!(edges[0].weight > edges[1].weight);
    }

    #[test]
    fn no_keys_means_no_edges() {
        let store = store();
        let agg = AttentionAggregator::new(store.as_ref(), 2, AttentionConfig::default());
        let all = ids(&["q1", "q2", "k1", "k2", "k3"]);
        assert!(agg.cross_attention(&all, &[], 1.0).unwrap().is_empty());
    }
}
