//! DiversitySelector integration tests.

use semrank_core::config::DiversityConfig;
use semrank_diversity::DiversitySelector;
use test_fixtures::{doc, planar, pseudo_random, store_from, GoldenCorpus};

const GOLDEN: &str = "golden/retrieval/small_corpus.json";

#[test]
fn golden_mmr_prefers_orthogonal_documents() {
    let corpus = GoldenCorpus::load(GOLDEN);
    let store = corpus.store();
    let selector =
        DiversitySelector::new(store.as_ref(), corpus.dimensions, DiversityConfig::default());
    let hits = selector.mmr_search(&corpus.query, 3, 0.3).unwrap();
    let ids: Vec<&str> = hits.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, corpus.expected("mmr_lambda_0_3_top3"));
}

#[test]
fn lambda_one_is_relevance_order() {
    let corpus = GoldenCorpus::load(GOLDEN);
    let store = corpus.store();
    let selector =
        DiversitySelector::new(store.as_ref(), corpus.dimensions, DiversityConfig::default());
    let hits = selector.mmr_search(&corpus.query, 3, 1.0).unwrap();
    let ids: Vec<&str> = hits.iter().map(|h| h.id.as_str()).collect();
    // Same as the semantic ranking of the same corpus.
    assert_eq!(ids, corpus.expected("semantic_top3_min_0_5"));
}

#[test]
fn lambda_zero_never_takes_near_duplicates_back_to_back() {
    // Three near-identical pairs spread around the circle.
    let store = store_from(
        2,
        vec![
            doc("p0", planar(0.0, 2), 0),
            doc("p0-dup", planar(3.0, 2), 1),
            doc("p1", planar(120.0, 2), 2),
            doc("p1-dup", planar(122.0, 2), 3),
            doc("p2", planar(240.0, 2), 4),
            doc("p2-dup", planar(241.0, 2), 5),
        ],
    );
    let selector = DiversitySelector::new(store.as_ref(), 2, DiversityConfig::default());
    let hits = selector.mmr_search(&[1.0, 0.0], 6, 0.0).unwrap();
    assert_eq!(hits.len(), 6);
    for pair in hits.windows(2) {
        let stem = |id: &str| id.trim_end_matches("-dup").to_string();
        assert_ne!(stem(&pair[0].id), stem(&pair[1].id), "{} then {}", pair[0].id, pair[1].id);
    }
}

#[test]
fn rerank_of_rag_style_candidates() {
    let store = store_from(
        8,
        (0..30).map(|i| doc(&format!("d{i:02}"), pseudo_random(i, 8), i as i64)),
    );
    let selector = DiversitySelector::new(store.as_ref(), 8, DiversityConfig::default());
    let pool: Vec<String> = (0..10).map(|i| format!("d{i:02}")).collect();
    let hits = selector.mmr_rerank(&pseudo_random(77, 8), &pool, 4, 0.5).unwrap();
    assert_eq!(hits.len(), 4);
    assert!(hits.iter().all(|h| pool.contains(&h.id)));
    assert_eq!(hits[0].max_similarity_to_selected, 0.0);
}

#[test]
fn hits_serialize() {
    let corpus = GoldenCorpus::load(GOLDEN);
    let store = corpus.store();
    let selector =
        DiversitySelector::new(store.as_ref(), corpus.dimensions, DiversityConfig::default());
    let hits = selector.mmr_search(&corpus.query, 1, 0.5).unwrap();
    let json = serde_json::to_value(&hits).unwrap();
    assert_eq!(json[0]["id"], "doc-a");
    assert!(json[0]["mmr_score"].is_number());
}
