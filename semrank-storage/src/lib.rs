//! # semrank-storage
//!
//! Reference implementations of the corpus-side collaborator contracts:
//! an in-memory [`MemoryStore`], an exact brute-force [`FlatIndex`] behind
//! the ANN contract, and a [`TermOverlapScorer`] for keyword relevance.

pub mod flat_index;
pub mod keyword;
pub mod memory_store;

pub use flat_index::FlatIndex;
pub use keyword::TermOverlapScorer;
pub use memory_store::MemoryStore;
