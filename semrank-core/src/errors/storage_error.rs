/// Failures surfaced by the store or ANN index collaborators.
///
/// Fatal to the in-flight query. Retry policy belongs to the caller.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("embedding store unavailable: {reason}")]
    StoreUnavailable { reason: String },

    #[error("ANN index unavailable: {reason}")]
    IndexUnavailable { reason: String },

    #[error("document {id} rejected: {reason}")]
    Rejected { id: String, reason: String },
}
