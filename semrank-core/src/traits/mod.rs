mod ann_index;
mod embedder;
mod embedding_store;
mod keyword_scorer;

pub use ann_index::{AnnNeighbor, IAnnIndex};
pub use embedder::IEmbedder;
pub use embedding_store::IEmbeddingStore;
pub use keyword_scorer::IKeywordScorer;
