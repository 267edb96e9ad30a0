/// semrank version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Seconds per day, used by recency decay.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Floating-point tolerance for "sums to one" checks on attention partitions.
pub const SOFTMAX_TOLERANCE: f64 = 1e-9;
