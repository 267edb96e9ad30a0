//! # semrank-attention
//!
//! Attention-style re-weighting of a corpus. Every form is a numerically
//! stable softmax over cosine similarities scaled by a temperature; the forms
//! differ in which documents attend to which.
//!
//! | Operation | Queries | Keys | Normalized over |
//! |---|---|---|---|
//! | `attention_scores` | one vector | corpus | whole corpus |
//! | `self_attention` | stored documents | corpus | (source, head) |
//! | `cross_attention` | stored documents | corpus minus queries, filtered | query |
//! | `causal_attention` | stored documents | documents no newer than the source | source |
//! | `flash_attention_search` | one vector | corpus in `(created_at, id)` blocks | block |
//! | `attention_matrix` | given ids | same ids | row |
//!
//! Multi-head attention slices vectors positionally into contiguous
//! segments. There are no learned per-head projections, so every head of
//! `self_attention` produces the same distribution.

pub mod aggregator;
pub mod causal;
pub mod cross_attention;
pub mod flash;
pub mod hits;
pub mod matrix;
pub mod multi_head;
pub mod partition;
pub mod scores;
pub mod self_attention;

pub use aggregator::AttentionAggregator;
pub use hits::{AttentionEdge, AttentionHit, AttentionMatrix, FlashHit, MultiHeadHit};
