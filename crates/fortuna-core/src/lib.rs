//! # fortuna-core
//!
//! Foundation crate for the Fortuna weighted picker.
//! Defines the catalog, selection records, modes, errors, config, and the
//! traits implemented by the storage and weighting crates.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::FortunaConfig;
pub use errors::{FortunaError, FortunaResult};
pub use models::{Catalog, CatalogEntry, Draw, ItemCount, SelectionMode, SelectionRecord};
