use crate::models::Document;

/// Full-text relevance collaborator used by hybrid search.
pub trait IKeywordScorer: Send + Sync {
    /// Relevance of `document` to `query`, 0.0 when unrelated.
    fn relevance(&self, query: &str, document: &Document) -> f64;

    /// Whether `document` satisfies the keyword query.
    fn matches(&self, query: &str, document: &Document) -> bool;
}
