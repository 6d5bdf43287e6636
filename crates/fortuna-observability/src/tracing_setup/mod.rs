//! Tracing setup: structured JSON logging filtered by `FORTUNA_LOG`.

use tracing_subscriber::EnvFilter;

use fortuna_core::config::{defaults, ObservabilityConfig};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV_VAR: &str = "FORTUNA_LOG";

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `FORTUNA_LOG` environment variable for filtering.
/// Defaults to `info` level if not set. Returns false if a global
/// subscriber was already installed.
pub fn init_tracing() -> bool {
    install(filter_from_env(defaults::DEFAULT_LOG_LEVEL))
}

/// Initialize tracing with `FORTUNA_LOG` if set, else the configured level.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    install(filter_from_env(&config.log_level))
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    install(EnvFilter::new(filter))
}

/// Filter from `FORTUNA_LOG`, or `fallback` when it is unset or invalid.
pub fn filter_from_env(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback))
}

fn install(filter: EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init()
        .is_ok()
}
