use super::document::Document;

/// Transient scored record produced while a query runs.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub document: Document,
    /// Raw score (cosine similarity unless the stage says otherwise).
    pub score: f64,
    /// Softmax weight, once attention has been applied.
    pub attention_weight: Option<f64>,
    /// Block the candidate was normalized in (flash attention).
    pub block_id: Option<usize>,
}

impl Candidate {
    pub fn new(document: Document, score: f64) -> Self {
        Self {
            document,
            score,
            attention_weight: None,
            block_id: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.document.id
    }
}
