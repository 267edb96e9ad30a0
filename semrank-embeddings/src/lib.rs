//! # semrank-embeddings
//!
//! Reference [`IEmbedder`](semrank_core::traits::IEmbedder) implementations.
//! Real deployments plug in a neural model behind the same trait.

pub mod cache;
pub mod cached;
pub mod hashing;

pub use cache::EmbeddingCache;
pub use cached::CachedEmbedder;
pub use hashing::HashingEmbedder;
