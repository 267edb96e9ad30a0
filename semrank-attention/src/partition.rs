//! One attention partition: a query attending over a target set.

use semrank_core::errors::SemrankResult;
use semrank_core::models::Document;
use semrank_scoring::{ranked_order, similarities_to, softmax_with_temperature};

/// Similarities and softmax weights, aligned with the targets they were
/// computed over. Weights sum to 1 unless the target set is empty.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    pub similarities: Vec<f64>,
    pub weights: Vec<f64>,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Indices whose weight exceeds `threshold`, heaviest first, ties by id.
    pub fn surviving(&self, targets: &[&Document], threshold: f64) -> Vec<usize> {
        let mut kept: Vec<usize> = (0..self.len())
            .filter(|&i| self.weights[i] > threshold)
            .collect();
        kept.sort_by(|&a, &b| {
            ranked_order(self.weights[a], &targets[a].id, self.weights[b], &targets[b].id)
        });
        kept
    }
}

/// Softmax of `similarity / temperature` for `query` over `targets`.
pub fn attend(
    query: &[f32],
    targets: &[&Document],
    temperature: f64,
    parallel_threshold: usize,
) -> SemrankResult<Partition> {
    let similarities = similarities_to(query, targets, parallel_threshold)?;
    let weights = softmax_with_temperature(&similarities, temperature);
    Ok(Partition {
        similarities,
        weights,
    })
}
