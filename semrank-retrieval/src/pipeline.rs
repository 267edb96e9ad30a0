//! RetrievalPipeline: borrows the collaborators for the duration of a query
//! batch and exposes every search mode as a method.

use semrank_core::config::RetrievalConfig;
use semrank_core::errors::SemrankResult;
use semrank_core::models::{Candidate, ScanPredicate};
use semrank_core::traits::{IAnnIndex, IEmbeddingStore, IKeywordScorer};
use semrank_core::validation;
use semrank_scoring::score_candidates;
use tracing::debug;

/// Read-only retrieval over a shared store.
pub struct RetrievalPipeline<'a> {
    pub(crate) store: &'a dyn IEmbeddingStore,
    pub(crate) ann: Option<&'a dyn IAnnIndex>,
    pub(crate) keyword: Option<&'a dyn IKeywordScorer>,
    pub(crate) dimensions: usize,
    pub(crate) config: RetrievalConfig,
}

impl<'a> RetrievalPipeline<'a> {
    /// Pipeline over `store` whose vectors all have `dimensions` components.
    pub fn new(store: &'a dyn IEmbeddingStore, dimensions: usize, config: RetrievalConfig) -> Self {
        Self {
            store,
            ann: None,
            keyword: None,
            dimensions,
            config,
        }
    }

    /// Route semantic and RAG candidate generation through an ANN index.
    pub fn with_ann_index(mut self, ann: &'a dyn IAnnIndex) -> Self {
        self.ann = Some(ann);
        self
    }

    /// Text relevance for hybrid search. Without one, hybrid search ranks
    /// on vector similarity alone.
    pub fn with_keyword_scorer(mut self, keyword: &'a dyn IKeywordScorer) -> Self {
        self.keyword = Some(keyword);
        self
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn has_ann_index(&self) -> bool {
        self.ann.is_some()
    }

    pub fn has_keyword_scorer(&self) -> bool {
        self.keyword.is_some()
    }

    pub(crate) fn check_query(&self, query: &[f32]) -> SemrankResult<()> {
        validation::require_dimensions(self.dimensions, query.len())
    }

    /// Scan with `predicate` and score every returned document against `query`.
    pub(crate) fn scan_scored(
        &self,
        query: &[f32],
        predicate: &ScanPredicate,
    ) -> SemrankResult<Vec<Candidate>> {
        let documents = self.store.scan(predicate)?;
        debug!(scanned = documents.len(), "corpus scan");
        score_candidates(query, documents, self.config.parallel_threshold)
    }
}
