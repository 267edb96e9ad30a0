//! Result records returned by the attention aggregator.

use serde::Serialize;

/// One document's share of a corpus-wide distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttentionHit {
    pub id: String,
    pub content: String,
    pub similarity: f64,
    pub weight: f64,
}

/// A surviving (source, target) weight from self, cross, or causal attention.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttentionEdge {
    pub source_id: String,
    pub target_id: String,
    /// Head index in `[1, head_count]`; only self-attention is multi-headed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<usize>,
    pub similarity: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiHeadHit {
    pub id: String,
    pub content: String,
    /// Cosine similarity per contiguous segment, in head order.
    pub head_scores: Vec<f64>,
    pub mean_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlashHit {
    pub id: String,
    pub content: String,
    pub similarity: f64,
    /// Weight normalized within the document's block only.
    pub weight: f64,
    pub block_id: usize,
}

/// Row-normalized pairwise weights over a fixed id list.
///
/// `weights[i][j]` is how much `ids[i]` attends to `ids[j]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttentionMatrix {
    pub ids: Vec<String>,
    pub weights: Vec<Vec<f64>>,
}

impl AttentionMatrix {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The row for `id`, if present.
    pub fn row(&self, id: &str) -> Option<&[f64]> {
        let i = self.ids.iter().position(|x| x == id)?;
        self.weights.get(i).map(Vec::as_slice)
    }

    /// Weight from `from` to `to`, if both are present.
    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        let j = self.ids.iter().position(|x| x == to)?;
        self.row(from).and_then(|row| row.get(j).copied())
    }
}
