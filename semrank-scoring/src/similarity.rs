//! Pairwise vector math. Every function rejects unequal lengths with
//! `DimensionMismatch`; accumulation happens in f64.

use semrank_core::validation::require_dimensions;
use semrank_core::SemrankResult;

/// Dot product of two equal-length vectors.
pub fn dot_product(a: &[f32], b: &[f32]) -> SemrankResult<f64> {
    require_dimensions(a.len(), b.len())?;
    Ok(a.iter()
        .zip(b.iter())
        .map(|(x, y)| (*x as f64) * (*y as f64))
        .sum())
}

/// Euclidean (L2) distance between two equal-length vectors.
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> SemrankResult<f64> {
    require_dimensions(a.len(), b.len())?;
    Ok(a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = (*x as f64) - (*y as f64);
            d * d
        })
        .sum::<f64>()
        .sqrt())
}

/// Cosine distance `1 − a·b / (|a||b|)`, in [0, 2].
///
/// A zero-magnitude input has no direction; its distance to anything is 1.0.
pub fn cosine_distance(a: &[f32], b: &[f32]) -> SemrankResult<f64> {
    require_dimensions(a.len(), b.len())?;
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom < f64::EPSILON || !denom.is_finite() {
        return Ok(1.0);
    }
    Ok(1.0 - (dot / denom).clamp(-1.0, 1.0))
}

/// Cosine similarity, defined as `1 − cosine_distance`.
///
/// Not re-normalized: for unit vectors this is the plain dot product, and the
/// range is [-1, 1].
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> SemrankResult<f64> {
    Ok(1.0 - cosine_distance(a, b)?)
}
