//! DiversitySelector: MMR over the corpus or over caller-chosen ids.

use std::collections::{HashMap, HashSet};

use semrank_core::config::{defaults, DiversityConfig};
use semrank_core::errors::{SemrankError, SemrankResult};
use semrank_core::models::{Document, ScanPredicate};
use semrank_core::traits::IEmbeddingStore;
use semrank_core::validation;
use semrank_scoring::similarities_to;
use tracing::{debug, info};

use crate::selection::select;
use crate::MmrHit;

pub struct DiversitySelector<'a> {
    store: &'a dyn IEmbeddingStore,
    dimensions: usize,
    config: DiversityConfig,
    parallel_threshold: usize,
}

impl<'a> DiversitySelector<'a> {
    pub fn new(store: &'a dyn IEmbeddingStore, dimensions: usize, config: DiversityConfig) -> Self {
        Self {
            store,
            dimensions,
            config,
            parallel_threshold: defaults::DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Configured default trade-off.
    pub fn lambda(&self) -> f64 {
        self.config.lambda
    }

    /// MMR over every embedded document.
    pub fn mmr_search(
        &self,
        query: &[f32],
        limit: usize,
        lambda: f64,
    ) -> SemrankResult<Vec<MmrHit>> {
        self.validate(query, limit, lambda)?;
        let corpus = self.store.scan(&ScanPredicate::all())?;
        debug!(candidates = corpus.len(), "mmr corpus scan");
        self.run(query, corpus, limit, lambda)
    }

    /// MMR restricted to `candidate_ids`, e.g. the ids returned by a RAG
    /// retrieval. Duplicate ids collapse; an id the store cannot return
    /// fails with `NotFound`.
    pub fn mmr_rerank(
        &self,
        query: &[f32],
        candidate_ids: &[String],
        limit: usize,
        lambda: f64,
    ) -> SemrankResult<Vec<MmrHit>> {
        self.validate(query, limit, lambda)?;
        let wanted: HashSet<&str> = candidate_ids.iter().map(String::as_str).collect();
        let found = self
            .store
            .scan(&ScanPredicate::all().restrict_to_ids(wanted.iter().copied()))?;
        let mut by_id: HashMap<String, Document> =
            found.into_iter().map(|d| (d.id.clone(), d)).collect();

        let mut candidates = Vec::with_capacity(by_id.len());
        let mut seen = HashSet::with_capacity(candidate_ids.len());
        for id in candidate_ids {
            if !seen.insert(id.as_str()) {
                continue;
            }
            let doc = by_id.remove(id).ok_or_else(|| SemrankError::not_found(id.as_str()))?;
            candidates.push(doc);
        }
        debug!(candidates = candidates.len(), "mmr rerank candidates");
        self.run(query, candidates, limit, lambda)
    }

    fn validate(&self, query: &[f32], limit: usize, lambda: f64) -> SemrankResult<()> {
        validation::require_positive("limit", limit)?;
        validation::require_unit_interval("lambda", lambda)?;
        validation::require_dimensions(self.dimensions, query.len())
    }

    fn run(
        &self,
        query: &[f32],
        candidates: Vec<Document>,
        limit: usize,
        lambda: f64,
    ) -> SemrankResult<Vec<MmrHit>> {
        let relevance = similarities_to(query, &candidates, self.parallel_threshold)?;
        let picks = select(&candidates, &relevance, limit, lambda)?;

        let hits: Vec<MmrHit> = picks
            .into_iter()
            .map(|p| {
                let doc = &candidates[p.index];
                MmrHit {
                    id: doc.id.clone(),
                    content: doc.content.clone(),
                    relevance: p.relevance,
                    max_similarity_to_selected: p.max_similarity_to_selected,
                    mmr_score: p.mmr_score,
                }
            })
            .collect();
        info!(limit, lambda, returned = hits.len(), "mmr selection complete");
        Ok(hits)
    }
}
