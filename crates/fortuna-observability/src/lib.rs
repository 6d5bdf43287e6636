//! # fortuna-observability
//!
//! Structured logging for the picker: subscriber setup and named events.

pub mod events;
pub mod tracing_setup;

pub use tracing_setup::{filter_from_env, init_from_config, init_tracing, init_tracing_with_filter, LOG_ENV_VAR};
