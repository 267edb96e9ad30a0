use crate::errors::SemrankResult;

/// `(document id, approximate distance)`.
pub type AnnNeighbor = (String, f64);

/// Approximate k-nearest-neighbor index.
///
/// Results are ordered by ascending distance but carry no exact top-k
/// guarantee. Callers use them as a coarse filter, never as a final ranking.
pub trait IAnnIndex: Send + Sync {
    fn query(&self, vector: &[f32], k: usize) -> SemrankResult<Vec<AnnNeighbor>>;
}
