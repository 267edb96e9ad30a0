//! Test fixture loader and corpus builders shared by every semrank crate's tests.
//!
//! Provides typed deserialization of the golden JSON files plus small
//! constructors for documents, vectors, and pre-populated stores.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use semrank_core::Document;
use semrank_storage::MemoryStore;

/// Directory holding the JSON fixtures. Resolved when this crate is
/// compiled, so it is the same for every test binary that links it.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Deserialize the JSON fixture at `relative_path` under [`fixtures_root`].
///
/// # Panics
/// On a missing file or a document that does not match `T`.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let raw = std::fs::read(&path)
        .unwrap_or_else(|e| panic!("cannot read fixture {}: {e}", path.display()));
    serde_json::from_slice(&raw)
        .unwrap_or_else(|e| panic!("malformed fixture {}: {e}", path.display()))
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).is_file()
}

/// A golden corpus: documents, a query vector, and expected id orderings.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenCorpus {
    pub description: String,
    pub dimensions: usize,
    pub query: Vec<f32>,
    pub documents: Vec<Document>,
    pub expected: std::collections::BTreeMap<String, Vec<String>>,
}

impl GoldenCorpus {
    pub fn load(relative_path: &str) -> Self {
        load_fixture(relative_path)
    }

    /// Expected id list by key.
    ///
    /// # Panics
    /// Panics if the key is missing from the fixture.
    pub fn expected(&self, key: &str) -> &[String] {
        self.expected
            .get(key)
            .unwrap_or_else(|| panic!("fixture has no expectation `{key}`"))
    }

    pub fn store(&self) -> Arc<MemoryStore> {
        store_from(self.dimensions, self.documents.clone())
    }
}

/// Fixed reference instant so timestamps are reproducible.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// `base_time()` shifted by whole seconds.
pub fn at(seconds: i64) -> DateTime<Utc> {
    base_time() + Duration::seconds(seconds)
}

/// An embedded document with content derived from its id.
pub fn doc(id: &str, embedding: Vec<f32>, created_seconds: i64) -> Document {
    Document::new(id, format!("content of {id}"), at(created_seconds)).with_embedding(embedding)
}

/// An embedded document with a random UUID id.
pub fn random_doc(embedding: Vec<f32>) -> Document {
    Document::new(uuid::Uuid::new_v4().to_string(), "generated", base_time())
        .with_embedding(embedding)
}

/// A document whose embedding is still pending.
pub fn pending_doc(id: &str, created_seconds: i64) -> Document {
    Document::new(id, format!("content of {id}"), at(created_seconds))
}

/// Unit vector in the plane at `degrees` from the x axis, padded to `dims`.
pub fn planar(degrees: f64, dims: usize) -> Vec<f32> {
    let rad = degrees.to_radians();
    let mut v = vec![0.0f32; dims.max(2)];
    v[0] = rad.cos() as f32;
    v[1] = rad.sin() as f32;
    v
}

/// One-hot vector of width `dims` with a 1.0 at `index`.
pub fn axis(index: usize, dims: usize) -> Vec<f32> {
    let mut v = vec![0.0f32; dims];
    v[index] = 1.0;
    v
}

/// Deterministic pseudo-random vector in [-0.5, 0.5).
pub fn pseudo_random(seed: usize, dims: usize) -> Vec<f32> {
    (0..dims)
        .map(|i| (((seed * 31 + i * 17 + 7) % 97) as f32 / 97.0) - 0.5)
        .collect()
}

/// A store of the given dimension populated with `documents`.
///
/// # Panics
/// Panics if a document is rejected by the store.
pub fn store_from(dims: usize, documents: impl IntoIterator<Item = Document>) -> Arc<MemoryStore> {
    let store = MemoryStore::new(dims);
    store
        .upsert_bulk(documents)
        .unwrap_or_else(|e| panic!("fixture document rejected: {e}"));
    Arc::new(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_directory_ships_with_the_crate() {
        assert!(fixtures_root().join("golden").is_dir());
        assert!(!fixture_exists("golden/missing.json"));
    }

    #[test]
    fn golden_corpus_loads() {
        assert!(fixture_exists("golden/retrieval/small_corpus.json"));
        let corpus = GoldenCorpus::load("golden/retrieval/small_corpus.json");
        assert_eq!(corpus.dimensions, 4);
        assert_eq!(corpus.documents.len(), 6);
        assert_eq!(corpus.documents.iter().filter(|d| d.is_searchable()).count(), 5);
        assert_eq!(corpus.expected("semantic_top3_min_0_5").len(), 3);
    }

    #[test]
    fn planar_vectors_are_unit_length() {
        for deg in [0.0, 30.0, 90.0, 225.0] {
            let v = planar(deg, 4);
            let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
            assert!((norm - 1.0).abs() < 1e-6);
            assert_eq!(v.len(), 4);
        }
    }

    #[test]
    fn store_from_keeps_pending_documents_out_of_scans() {
        use semrank_core::traits::IEmbeddingStore;
        let store = store_from(2, vec![doc("a", vec![1.0, 0.0], 0), pending_doc("b", 1)]);
        assert_eq!(store.len(), 2);
        assert_eq!(
            store
                .scan(&semrank_core::ScanPredicate::all())
                .unwrap()
                .len(),
            1
        );
    }
}
