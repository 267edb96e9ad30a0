//! # semrank-core
//!
//! Foundation crate for semrank.
//! Defines the document model, the collaborator contracts (store, ANN index,
//! embedder, keyword scorer), errors, config, and shared parameter checks.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod validation;

// Re-export the most commonly used types at the crate root.
pub use config::SemrankConfig;
pub use errors::{SemrankError, SemrankResult};
pub use models::{Candidate, Document, Metadata, MetadataFilter, ScanPredicate};
