use crate::errors::SemrankResult;
use crate::models::{Document, ScanPredicate};

/// Read access to the corpus.
pub trait IEmbeddingStore: Send + Sync {
    /// Every document matching `predicate` that has an embedding.
    /// Documents with a pending embedding are never returned.
    fn scan(&self, predicate: &ScanPredicate) -> SemrankResult<Vec<Document>>;
}
