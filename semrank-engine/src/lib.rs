//! # semrank-engine
//!
//! [`SemrankEngine`] holds shared handles to the collaborators and the
//! configuration, builds the retrieval, attention, and diversity components
//! on demand, and runs every operation inside a `tracing` span. The `*_text`
//! entry points embed the query once and delegate to the vector operations.

pub mod engine;
pub mod tracing_setup;

pub use engine::SemrankEngine;
