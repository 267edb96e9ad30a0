use proptest::prelude::*;
use semrank_core::constants::SOFTMAX_TOLERANCE;
use semrank_scoring::{cosine_similarity, euclidean_distance, softmax};

fn vec_pair(dim: usize) -> impl Strategy<Value = (Vec<f32>, Vec<f32>)> {
    (
        prop::collection::vec(-10.0f32..10.0, dim),
        prop::collection::vec(-10.0f32..10.0, dim),
    )
}

proptest! {
    #[test]
    fn cosine_similarity_is_bounded_and_symmetric((a, b) in vec_pair(16)) {
        let ab = cosine_similarity(&a, &b).unwrap();
        let ba = cosine_similarity(&b, &a).unwrap();
        prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&ab));
        prop_assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn euclidean_distance_is_non_negative((a, b) in vec_pair(8)) {
        prop_assert!(euclidean_distance(&a, &b).unwrap() >= 0.0);
    }

    #[test]
    fn softmax_sums_to_one(logits in prop::collection::vec(-50.0f64..50.0, 1..64)) {
        let w = softmax(&logits);
        let sum: f64 = w.iter().sum();
        prop_assert!((sum - 1.0).abs() < SOFTMAX_TOLERANCE);
        prop_assert!(w.iter().all(|x| x.is_finite() && *x >= 0.0));
    }

    #[test]
    fn softmax_is_shift_invariant(
        logits in prop::collection::vec(-20.0f64..20.0, 1..32),
        shift in -100.0f64..100.0,
    ) {
        let shifted: Vec<f64> = logits.iter().map(|x| x + shift).collect();
        let a = softmax(&logits);
        let b = softmax(&shifted);
        for (x, y) in a.iter().zip(&b) {
            prop_assert!((x - y).abs() < 1e-9);
        }
    }
}
