use proptest::prelude::*;
use semrank_core::config::DiversityConfig;
use semrank_core::models::Document;
use semrank_diversity::DiversitySelector;
use semrank_scoring::{cosine_similarity, ranked_order};
use test_fixtures::{doc, random_doc, store_from};

const DIMS: usize = 5;

fn corpus() -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(prop::collection::vec(-1.0f32..1.0, DIMS), 1..25)
}

fn documents(vectors: Vec<Vec<f32>>) -> Vec<Document> {
    vectors
        .into_iter()
        .enumerate()
        .map(|(i, v)| doc(&format!("d{i:02}"), v, i as i64))
        .collect()
}

proptest! {
    #[test]
    fn lambda_one_matches_relevance_ranking(
        vectors in corpus(),
        query in prop::collection::vec(-1.0f32..1.0, DIMS),
        limit in 1usize..30,
    ) {
        let docs = documents(vectors);
        let mut expected: Vec<(f64, String)> = docs
            .iter()
            .map(|d| (cosine_similarity(&query, d.embedding().unwrap()).unwrap(), d.id.clone()))
            .collect();
        expected.sort_by(|a, b| ranked_order(a.0, &a.1, b.0, &b.1));
        expected.truncate(limit);

        let store = store_from(DIMS, docs);
        let selector = DiversitySelector::new(store.as_ref(), DIMS, DiversityConfig::default());
        let hits = selector.mmr_search(&query, limit, 1.0).unwrap();

        let got: Vec<&str> = hits.iter().map(|h| h.id.as_str()).collect();
        let want: Vec<&str> = expected.iter().map(|e| e.1.as_str()).collect();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn picks_are_distinct_and_bounded(
        vectors in corpus(),
        query in prop::collection::vec(-1.0f32..1.0, DIMS),
        limit in 1usize..30,
        lambda in 0.0f64..=1.0,
    ) {
        let n = vectors.len();
        let store = store_from(DIMS, vectors.into_iter().map(random_doc));
        let selector = DiversitySelector::new(store.as_ref(), DIMS, DiversityConfig::default());
        let hits = selector.mmr_search(&query, limit, lambda).unwrap();

        prop_assert_eq!(hits.len(), limit.min(n));
        let mut ids: Vec<&str> = hits.iter().map(|h| h.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), hits.len());
        prop_assert!(hits.iter().all(|h| h.mmr_score.is_finite()));
    }
}
