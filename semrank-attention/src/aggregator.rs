//! AttentionAggregator: owns the store handle and the attention settings
//! shared by every attention form.

use std::collections::{HashMap, HashSet};

use semrank_core::config::{defaults, AttentionConfig};
use semrank_core::errors::{SemrankError, SemrankResult};
use semrank_core::models::{Document, ScanPredicate};
use semrank_core::traits::IEmbeddingStore;
use semrank_core::validation;
use tracing::debug;

use crate::hits::AttentionEdge;
use crate::partition::{self, Partition};

pub struct AttentionAggregator<'a> {
    pub(crate) store: &'a dyn IEmbeddingStore,
    pub(crate) dimensions: usize,
    pub(crate) config: AttentionConfig,
    pub(crate) parallel_threshold: usize,
}

impl<'a> AttentionAggregator<'a> {
    pub fn new(store: &'a dyn IEmbeddingStore, dimensions: usize, config: AttentionConfig) -> Self {
        Self {
            store,
            dimensions,
            config,
            parallel_threshold: defaults::DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Corpus size from which similarity scoring fans out over rayon.
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    pub fn config(&self) -> &AttentionConfig {
        &self.config
    }

    pub(crate) fn check_query(&self, query: &[f32]) -> SemrankResult<()> {
        validation::require_dimensions(self.dimensions, query.len())
    }

    /// Every embedded document.
    pub(crate) fn corpus(&self) -> SemrankResult<Vec<Document>> {
        let documents = self.store.scan(&ScanPredicate::all())?;
        debug!(scanned = documents.len(), "attention corpus scan");
        Ok(documents)
    }

    pub(crate) fn attend(
        &self,
        query: &Document,
        targets: &[&Document],
        temperature: f64,
    ) -> SemrankResult<Partition> {
        partition::attend(
            query.embedding().unwrap_or(&[]),
            targets,
            temperature,
            self.parallel_threshold,
        )
    }

    /// Edges for one partition after pruning, heaviest first.
    pub(crate) fn pruned_edges(
        &self,
        source: &Document,
        targets: &[&Document],
        partition: &Partition,
        head: Option<usize>,
    ) -> Vec<AttentionEdge> {
        partition
            .surviving(targets, self.config.prune_threshold)
            .into_iter()
            .map(|i| AttentionEdge {
                source_id: source.id.clone(),
                target_id: targets[i].id.clone(),
                head,
                similarity: partition.similarities[i],
                weight: partition.weights[i],
            })
            .collect()
    }
}

/// Collapse repeated ids, keeping the first occurrence.
pub(crate) fn dedupe(ids: &[String]) -> Vec<&str> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter()
        .map(String::as_str)
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Look up each id in `corpus`, failing with `NotFound` on the first miss.
/// Returns corpus indices in input order, duplicates collapsed.
pub(crate) fn resolve(ids: &[String], corpus: &[Document]) -> SemrankResult<Vec<usize>> {
    let positions: HashMap<&str, usize> = corpus
        .iter()
        .enumerate()
        .map(|(i, d)| (d.id.as_str(), i))
        .collect();
    dedupe(ids)
        .into_iter()
        .map(|id| {
            positions
                .get(id)
                .copied()
                .ok_or_else(|| SemrankError::not_found(id))
        })
        .collect()
}
