//! Thread-safe in-memory corpus.
//!
//! Ingestion (`insert`/`upsert`/`remove`) is atomic per document. Scans see
//! whatever snapshot the map exposes at the time they run.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

use semrank_core::errors::StorageError;
use semrank_core::models::{Document, ScanPredicate};
use semrank_core::traits::IEmbeddingStore;
use semrank_core::validation::require_dimensions;
use semrank_core::SemrankResult;

/// In-memory document store keyed by id.
pub struct MemoryStore {
    dimensions: usize,
    documents: DashMap<String, Document>,
}

impl MemoryStore {
    /// Create an empty store accepting embeddings of `dimensions` length.
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            documents: DashMap::new(),
        }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Insert a new document. Fails if the id is already present.
    pub fn insert(&self, document: Document) -> SemrankResult<()> {
        self.check_dimensions(&document)?;
        match self.documents.entry(document.id.clone()) {
            Entry::Occupied(_) => Err(StorageError::Rejected {
                id: document.id,
                reason: "id already exists".to_string(),
            }
            .into()),
            Entry::Vacant(slot) => {
                slot.insert(document);
                Ok(())
            }
        }
    }

    /// Insert or replace a document by id.
    pub fn upsert(&self, document: Document) -> SemrankResult<()> {
        self.check_dimensions(&document)?;
        self.documents.insert(document.id.clone(), document);
        Ok(())
    }

    /// Upsert every document, stopping at the first rejected one.
    pub fn upsert_bulk(
        &self,
        documents: impl IntoIterator<Item = Document>,
    ) -> SemrankResult<usize> {
        let mut count = 0;
        for doc in documents {
            self.upsert(doc)?;
            count += 1;
        }
        debug!(count, "bulk upsert complete");
        Ok(count)
    }

    pub fn get(&self, id: &str) -> Option<Document> {
        self.documents.get(id).map(|d| d.value().clone())
    }

    pub fn remove(&self, id: &str) -> Option<Document> {
        self.documents.remove(id).map(|(_, d)| d)
    }

    /// Total documents, including ones with a pending embedding.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents still waiting for an embedding.
    pub fn pending_count(&self) -> usize {
        self.documents.iter().filter(|d| !d.is_searchable()).count()
    }

    fn check_dimensions(&self, document: &Document) -> SemrankResult<()> {
        match document.dimensions() {
            Some(actual) => require_dimensions(self.dimensions, actual),
            None => Ok(()),
        }
    }
}

impl IEmbeddingStore for MemoryStore {
    fn scan(&self, predicate: &ScanPredicate) -> SemrankResult<Vec<Document>> {
        let mut docs: Vec<Document> = self
            .documents
            .iter()
            .filter(|d| d.is_searchable() && predicate.matches(d.value()))
            .map(|d| d.value().clone())
            .collect();
        // DashMap iteration order is arbitrary.
        docs.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(docs)
    }
}
