//! Multi-query cluster search.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use semrank_core::errors::{SemrankError, SemrankResult};
use semrank_core::models::ScanPredicate;
use semrank_core::validation;
use semrank_scoring::{ranked_order, similarities_to};
use tracing::{debug, info};

use crate::hits::ClusterHit;
use crate::pipeline::RetrievalPipeline;

/// How per-query similarities collapse into one document score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    Max,
    Avg,
    Min,
}

impl Aggregation {
    /// Aggregate a non-empty slice.
    fn apply(self, values: &[f64]) -> f64 {
        match self {
            Self::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Self::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
            Self::Avg => values.iter().sum::<f64>() / values.len() as f64,
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Max => "max",
            Self::Avg => "avg",
            Self::Min => "min",
        };
        f.write_str(name)
    }
}

impl FromStr for Aggregation {
    type Err = SemrankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "max" => Ok(Self::Max),
            "avg" | "mean" => Ok(Self::Avg),
            "min" => Ok(Self::Min),
            other => Err(SemrankError::invalid(
                "aggregation",
                format!("expected max, avg or min, got {other:?}"),
            )),
        }
    }
}

impl RetrievalPipeline<'_> {
    /// Score every document against each query vector, drop pairs at or below
    /// the configured `cluster_min_similarity`, and aggregate what remains.
    /// Documents with no surviving pair are excluded.
    pub fn cluster_search(
        &self,
        query_vectors: &[Vec<f32>],
        limit: usize,
        aggregation: Aggregation,
    ) -> SemrankResult<Vec<ClusterHit>> {
        validation::require_positive("limit", limit)?;
        if query_vectors.is_empty() {
            return Err(SemrankError::invalid(
                "query_vectors",
                "at least one query vector is required",
            ));
        }
        for query in query_vectors {
            self.check_query(query)?;
        }

        let documents = self.store.scan(&ScanPredicate::all())?;
        let threshold = self.config.parallel_threshold;
        let per_query = query_vectors
            .iter()
            .map(|q| similarities_to(q, &documents, threshold))
            .collect::<SemrankResult<Vec<_>>>()?;

        let floor = self.config.cluster_min_similarity;
        let mut hits = Vec::new();
        let mut survivors = Vec::with_capacity(query_vectors.len());
        for (index, document) in documents.into_iter().enumerate() {
            survivors.clear();
            survivors.extend(per_query.iter().map(|s| s[index]).filter(|s| *s > floor));
            if survivors.is_empty() {
                continue;
            }
            hits.push(ClusterHit {
                score: aggregation.apply(&survivors),
                matched_queries: survivors.len(),
                id: document.id,
                content: document.content,
                metadata: document.metadata,
            });
        }
        debug!(
            queries = query_vectors.len(),
            matched = hits.len(),
            %aggregation,
            "cluster scoring"
        );

        hits.sort_by(|a, b| ranked_order(a.score, &a.id, b.score, &b.id));
        hits.truncate(limit);
        info!(limit, returned = hits.len(), "cluster search complete");
        Ok(hits)
    }
}
