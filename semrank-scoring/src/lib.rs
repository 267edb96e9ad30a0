//! # semrank-scoring
//!
//! Pure score functions shared by retrieval, attention, and diversity.
//! Everything here is side-effect free and safe to call concurrently.

pub mod batch;
pub mod ranking;
pub mod segments;
pub mod similarity;
pub mod softmax;

pub use batch::{score_candidates, similarities_to};
pub use ranking::ranked_order;
pub use segments::segment_similarities;
pub use similarity::{cosine_distance, cosine_similarity, dot_product, euclidean_distance};
pub use softmax::{softmax, softmax_with_temperature};
