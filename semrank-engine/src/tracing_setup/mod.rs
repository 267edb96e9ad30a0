//! Tracing setup: `EnvFilter`-driven subscriber, human-readable or JSON.

pub mod spans;

use semrank_core::config::ObservabilityConfig;
use semrank_core::errors::{SemrankError, SemrankResult};
use tracing_subscriber::EnvFilter;

/// Environment variable consulted before the configured level.
pub const LOG_ENV: &str = "SEMRANK_LOG";

/// Build the filter: `SEMRANK_LOG` when set, else `config.log_level`.
pub fn env_filter(config: &ObservabilityConfig) -> SemrankResult<EnvFilter> {
    match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| {
            SemrankError::Config(format!("invalid log level {:?}: {e}", config.log_level))
        }),
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(config: &ObservabilityConfig) -> SemrankResult<()> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    let installed = if config.json {
        builder
            .json()
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| SemrankError::Config(format!("tracing subscriber: {e}")))
}
