use proptest::prelude::*;
use semrank_core::config::RetrievalConfig;
use semrank_core::models::Document;
use semrank_retrieval::RetrievalPipeline;
use test_fixtures::{doc, store_from};

const DIMS: usize = 6;

fn corpus() -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(prop::collection::vec(-1.0f32..1.0, DIMS), 0..40)
}

proptest! {
    #[test]
    fn semantic_results_sorted_and_above_floor(
        vectors in corpus(),
        query in prop::collection::vec(-1.0f32..1.0, DIMS),
        k in 1usize..20,
        min_similarity in -1.0f64..1.0,
    ) {
        let docs: Vec<Document> = vectors
            .into_iter()
            .enumerate()
            .map(|(i, v)| doc(&format!("d{i:03}"), v, i as i64))
            .collect();
        let store = store_from(DIMS, docs);
        let pipeline = RetrievalPipeline::new(store.as_ref(), DIMS, RetrievalConfig::default());

        let hits = pipeline.semantic_search(&query, k, min_similarity, &[]).unwrap();
        prop_assert!(hits.len() <= k);
        prop_assert!(hits.iter().all(|h| h.similarity >= min_similarity));
        for pair in hits.windows(2) {
            prop_assert!(pair[0].similarity >= pair[1].similarity);
            if pair[0].similarity == pair[1].similarity {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn temporal_combined_score_is_a_convex_blend(
        vectors in corpus(),
        query in prop::collection::vec(-1.0f32..1.0, DIMS),
        time_weight in 0.0f64..=1.0,
    ) {
        let docs: Vec<Document> = vectors
            .into_iter()
            .enumerate()
            .map(|(i, v)| doc(&format!("d{i:03}"), v, i as i64 * 3_600))
            .collect();
        let store = store_from(DIMS, docs);
        let pipeline = RetrievalPipeline::new(store.as_ref(), DIMS, RetrievalConfig::default());
        let now = test_fixtures::at(200 * 3_600);

        let hits = pipeline.temporal_search_at(&query, 50, 30.0, time_weight, now).unwrap();
        for h in &hits {
            let expected = (1.0 - time_weight) * h.similarity + time_weight * h.recency;
            prop_assert!((h.combined_score - expected).abs() < 1e-12);
            prop_assert!(h.recency > 0.0 && h.recency <= 1.0);
        }
    }
}
