//! Metadata predicate language: field equality and subset containment.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::document::{Document, Metadata};

/// A single metadata condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum MetadataFilter {
    /// `metadata[field] = value`.
    Eq { field: String, value: Value },
    /// `metadata ⊇ subset`.
    Contains { subset: Metadata },
}

impl MetadataFilter {
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn contains(subset: Metadata) -> Self {
        Self::Contains { subset }
    }

    pub fn matches(&self, metadata: &Metadata) -> bool {
        match self {
            Self::Eq { field, value } => metadata.get(field) == Some(value),
            Self::Contains { subset } => subset.iter().all(|(key, needle)| {
                metadata
                    .get(key)
                    .is_some_and(|haystack| json_contains(haystack, needle))
            }),
        }
    }
}

/// Structural containment between JSON values.
///
/// Objects contain every key of the needle with a contained value, arrays
/// contain every needle element somewhere, scalars compare by equality.
pub fn json_contains(haystack: &Value, needle: &Value) -> bool {
    match (haystack, needle) {
        (Value::Object(h), Value::Object(n)) => n
            .iter()
            .all(|(k, nv)| h.get(k).is_some_and(|hv| json_contains(hv, nv))),
        (Value::Array(h), Value::Array(n)) => n
            .iter()
            .all(|nv| h.iter().any(|hv| json_contains(hv, nv))),
        // A scalar needle is contained in an array holding it.
        (Value::Array(h), scalar) => h.iter().any(|hv| hv == scalar),
        (h, n) => h == n,
    }
}

/// Conjunction of metadata filters plus an optional id allow-list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanPredicate {
    pub filters: Vec<MetadataFilter>,
    /// When set, only these ids qualify (used to restrict a scan to ANN candidates).
    pub ids: Option<BTreeSet<String>>,
}

impl ScanPredicate {
    /// Every searchable document.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_filters(filters: impl IntoIterator<Item = MetadataFilter>) -> Self {
        Self {
            filters: filters.into_iter().collect(),
            ids: None,
        }
    }

    pub fn and(mut self, filter: MetadataFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn restrict_to_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn matches(&self, document: &Document) -> bool {
        if let Some(ids) = &self.ids {
            if !ids.contains(&document.id) {
                return false;
            }
        }
        self.filters.iter().all(|f| f.matches(&document.metadata))
    }
}
