use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque key/value metadata attached to a document.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// A corpus document. Created by ingestion, read-only everywhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique, stable identifier.
    pub id: String,
    /// Text content.
    pub content: String,
    /// Embedding vector. `None` means the embedding is still pending and the
    /// document takes no part in any search path.
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
    #[serde(default)]
    pub metadata: Metadata,
    /// Insertion time. May collide across documents.
    pub created_at: DateTime<Utc>,
}

impl Document {
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            embedding: None,
            metadata: Metadata::new(),
            created_at,
        }
    }

    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = Some(embedding);
        self
    }

    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// The embedding, if present.
    pub fn embedding(&self) -> Option<&[f32]> {
        self.embedding.as_deref()
    }

    /// Whether the document participates in search (has an embedding).
    pub fn is_searchable(&self) -> bool {
        self.embedding.is_some()
    }

    pub fn dimensions(&self) -> Option<usize> {
        self.embedding.as_ref().map(Vec::len)
    }
}

/// Identity equality: two documents are equal if they share an id.
impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Document {}

/// Deterministic corpus order: creation time, then id.
pub fn chronological_order(a: &Document, b: &Document) -> Ordering {
    a.created_at
        .cmp(&b.created_at)
        .then_with(|| a.id.cmp(&b.id))
}
