//! Per-head similarity over contiguous vector slices.
//!
//! Heads are positional slices of the embedding, not learned projections.

use semrank_core::{SemrankError, SemrankResult};

use crate::similarity::cosine_similarity;

/// Cosine similarity of each of the `num_heads` contiguous `head_dim`-wide
/// segments of `a` and `b`.
pub fn segment_similarities(
    a: &[f32],
    b: &[f32],
    num_heads: usize,
    head_dim: usize,
) -> SemrankResult<Vec<f64>> {
    if num_heads == 0 || head_dim == 0 {
        return Err(SemrankError::invalid(
            "num_heads",
            "head count and head dimension must be greater than zero",
        ));
    }
    let width = num_heads * head_dim;
    for v in [a, b] {
        if v.len() != width {
            return Err(SemrankError::DimensionMismatch {
                expected: width,
                actual: v.len(),
            });
        }
    }
    a.chunks_exact(head_dim)
        .zip(b.chunks_exact(head_dim))
        .map(|(sa, sb)| cosine_similarity(sa, sb))
        .collect()
}
