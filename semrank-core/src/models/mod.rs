pub mod candidate;
pub mod document;
pub mod predicate;

pub use candidate::Candidate;
pub use document::{chronological_order, Document, Metadata};
pub use predicate::{json_contains, MetadataFilter, ScanPredicate};
