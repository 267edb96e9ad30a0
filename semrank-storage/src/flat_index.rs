//! Exact brute-force nearest-neighbor search behind the ANN contract.
//!
//! Scans the whole store on every query. Stands in for an HNSW (or similar)
//! index in tests and small deployments; the pipeline treats its output as
//! approximate regardless.

use std::sync::Arc;

use semrank_core::models::ScanPredicate;
use semrank_core::traits::{AnnNeighbor, IAnnIndex, IEmbeddingStore};
use semrank_core::SemrankResult;
use semrank_scoring::cosine_distance;

/// Flat (exhaustive) cosine-distance index over a store.
pub struct FlatIndex<S: IEmbeddingStore> {
    store: Arc<S>,
}

impl<S: IEmbeddingStore> FlatIndex<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S: IEmbeddingStore> IAnnIndex for FlatIndex<S> {
    fn query(&self, vector: &[f32], k: usize) -> SemrankResult<Vec<AnnNeighbor>> {
        if k == 0 {
            return Ok(Vec::new());
        }
        let docs = self.store.scan(&ScanPredicate::all())?;
        let mut neighbors = docs
            .into_iter()
            .map(|d| {
                let distance = cosine_distance(vector, d.embedding().unwrap_or(&[]))?;
                Ok((d.id, distance))
            })
            .collect::<SemrankResult<Vec<AnnNeighbor>>>()?;

        neighbors.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        neighbors.truncate(k);
        Ok(neighbors)
    }
}
