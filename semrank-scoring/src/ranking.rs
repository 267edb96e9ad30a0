//! The one ordering every ranked output uses: score descending, then id ascending.

use std::cmp::Ordering;

/// Compare two ranked items so that `sort_by` yields descending score with
/// ascending-id tie-breaks.
pub fn ranked_order(score_a: f64, id_a: &str, score_b: f64, id_b: &str) -> Ordering {
    score_b.total_cmp(&score_a).then_with(|| id_a.cmp(id_b))
}
