// Single source of truth for all default values.

// --- Corpus ---
pub const DEFAULT_DIMENSIONS: usize = 384;

// --- Retrieval ---
pub const DEFAULT_MIN_SIMILARITY: f64 = 0.7;
pub const DEFAULT_ANN_OVERFETCH: usize = 4;
pub const DEFAULT_HYBRID_SIMILARITY_FLOOR: f64 = 0.3;
pub const DEFAULT_VECTOR_WEIGHT: f64 = 0.7;
pub const DEFAULT_KEYWORD_WEIGHT: f64 = 0.3;
pub const DEFAULT_DECAY_DAYS: f64 = 30.0;
pub const DEFAULT_TIME_WEIGHT: f64 = 0.3;
pub const DEFAULT_CLUSTER_MIN_SIMILARITY: f64 = 0.5;
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

// --- Attention ---
pub const DEFAULT_TEMPERATURE: f64 = 1.0;
pub const DEFAULT_PRUNE_THRESHOLD: f64 = 0.01;
pub const DEFAULT_HEAD_COUNT: usize = 4;
pub const DEFAULT_BLOCK_SIZE: usize = 64;

// --- Diversity ---
pub const DEFAULT_MMR_LAMBDA: f64 = 0.5;

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_MODEL: &str = "hashing-v1";
pub const DEFAULT_EMBEDDING_CACHE_SIZE: u64 = 10_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
