//! `FORTUNA_LOG` handling. Kept in its own binary because it mutates the
//! process environment and installs the global subscriber.

use fortuna_core::config::defaults::DEFAULT_LOG_LEVEL;
use fortuna_observability::{filter_from_env, init_tracing, LOG_ENV_VAR};

#[test]
fn fortuna_log_overrides_default_level() {
    std::env::remove_var(LOG_ENV_VAR);
    assert_eq!(filter_from_env(DEFAULT_LOG_LEVEL).to_string(), DEFAULT_LOG_LEVEL);

    std::env::set_var(LOG_ENV_VAR, "fortuna_storage=debug");
    let filter = filter_from_env(DEFAULT_LOG_LEVEL).to_string();
    assert!(filter.contains("fortuna_storage=debug"), "got {filter}");

    assert!(init_tracing());
    assert!(!init_tracing());
    tracing::debug!(target: "fortuna_storage", "visible under FORTUNA_LOG");

    std::env::remove_var(LOG_ENV_VAR);
}
