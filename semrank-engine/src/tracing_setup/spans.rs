//! Span constructors per subsystem.

/// Retrieval span: `operation` is the pipeline method, `limit` its result cap.
#[macro_export]
macro_rules! retrieval_span {
    ($operation:expr, $limit:expr) => {
        tracing::info_span!("semrank.retrieval", operation = $operation, limit = $limit)
    };
}

#[macro_export]
macro_rules! attention_span {
    ($operation:expr, $temperature:expr) => {
        tracing::info_span!(
            "semrank.attention",
            operation = $operation,
            temperature = $temperature
        )
    };
}

#[macro_export]
macro_rules! diversity_span {
    ($operation:expr, $lambda:expr) => {
        tracing::info_span!("semrank.diversity", operation = $operation, lambda = $lambda)
    };
}

#[macro_export]
macro_rules! embedding_span {
    ($model:expr, $dimension:expr) => {
        tracing::info_span!("semrank.embedding", model = %$model, dimension = $dimension)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RETRIEVAL: &str = "semrank.retrieval";
    pub const ATTENTION: &str = "semrank.attention";
    pub const DIVERSITY: &str = "semrank.diversity";
    pub const EMBEDDING: &str = "semrank.embedding";
}
