use proptest::prelude::*;
use semrank_attention::AttentionAggregator;
use semrank_core::config::AttentionConfig;
use semrank_core::constants::SOFTMAX_TOLERANCE;
use semrank_core::models::Document;
use test_fixtures::{doc, store_from};

const DIMS: usize = 4;

fn corpus() -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(prop::collection::vec(-1.0f32..1.0, DIMS), 1..30)
}

fn documents(vectors: Vec<Vec<f32>>) -> Vec<Document> {
    vectors
        .into_iter()
        .enumerate()
        .map(|(i, v)| doc(&format!("d{i:02}"), v, (i as i64) % 5))
        .collect()
}

proptest! {
    #[test]
    fn pruned_weights_exceed_threshold(
        vectors in corpus(),
        temperature in 0.05f64..2.0,
    ) {
        let docs = documents(vectors);
        let source = docs[0].id.clone();
        let store = store_from(DIMS, docs);
        let agg = AttentionAggregator::new(store.as_ref(), DIMS, AttentionConfig::default());

        let edges = agg.self_attention(&[source.clone()], 1, temperature).unwrap();
        prop_assert!(edges.iter().all(|e| e.weight > 0.01));
        prop_assert!(edges.iter().map(|e| e.weight).sum::<f64>() <= 1.0 + SOFTMAX_TOLERANCE);

        let causal = agg.causal_attention(&[source], temperature).unwrap();
        prop_assert!(causal.iter().all(|e| e.weight > 0.01));
    }

    #[test]
    fn flash_blocks_each_sum_to_one(
        vectors in corpus(),
        block_size in 1usize..8,
    ) {
        let n = vectors.len();
        let store = store_from(DIMS, documents(vectors));
        let agg = AttentionAggregator::new(store.as_ref(), DIMS, AttentionConfig::default());

        let hits = agg.flash_attention_search(&[1.0, 0.5, -0.5, 0.25], block_size, n).unwrap();
        prop_assert_eq!(hits.len(), n);
        for block in 0..n.div_ceil(block_size) {
            let sum: f64 = hits.iter().filter(|h| h.block_id == block).map(|h| h.weight).sum();
            prop_assert!((sum - 1.0).abs() < SOFTMAX_TOLERANCE);
        }
    }

    #[test]
    fn matrix_rows_sum_to_one(vectors in corpus(), temperature in 0.05f64..2.0) {
        let docs = documents(vectors);
        let ids: Vec<String> = docs.iter().map(|d| d.id.clone()).collect();
        let store = store_from(DIMS, docs);
        let agg = AttentionAggregator::new(store.as_ref(), DIMS, AttentionConfig::default());

        let m = agg.attention_matrix(&ids, temperature).unwrap();
        for row in &m.weights {
            prop_assert!((row.iter().sum::<f64>() - 1.0).abs() < SOFTMAX_TOLERANCE);
        }
    }
}
