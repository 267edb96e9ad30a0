//! # semrank-retrieval
//!
//! Vector retrieval over an [`IEmbeddingStore`](semrank_core::traits::IEmbeddingStore),
//! optionally pre-filtered by an [`IAnnIndex`](semrank_core::traits::IAnnIndex).
//!
//! ## Search modes
//! - **semantic**: exact cosine ranking with a similarity floor and metadata filters
//! - **rag**: coarse ANN candidates, exact re-score, configured floor
//! - **hybrid**: weighted vector similarity + keyword relevance
//! - **temporal**: similarity blended with exponential recency decay
//! - **cluster**: several query vectors aggregated per document

pub mod hits;
pub mod pipeline;
pub mod search;

pub use hits::{ClusterHit, HybridHit, RagHit, SearchHit, TemporalHit};
pub use pipeline::RetrievalPipeline;
pub use search::cluster::Aggregation;
