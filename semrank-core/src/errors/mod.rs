mod embedding_error;
mod semrank_error;
mod storage_error;

pub use embedding_error::EmbeddingError;
pub use semrank_error::{SemrankError, SemrankResult};
pub use storage_error::StorageError;
