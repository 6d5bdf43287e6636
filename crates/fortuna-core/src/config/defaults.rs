// Single source of truth for all default values.

use crate::models::{CatalogEntry, SelectionMode};

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "fortuna.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Selection ---
pub const DEFAULT_MODE: SelectionMode = SelectionMode::Normal;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";

// --- Catalog ---
pub const DEFAULT_CATALOG: &[(&str, f64)] = &[
    ("PC", 1.0),
    ("PS5", 1.0),
    ("Odin 2", 0.7),
    ("Book", 1.0),
    ("Meta Quest 3", 0.2),
    ("LeetCode", 1.0),
    ("Nintendo Switch", 0.5),
    ("RG353V", 0.2),
    ("Anime", 0.7),
];

pub fn default_catalog_entries() -> Vec<CatalogEntry> {
    DEFAULT_CATALOG
        .iter()
        .map(|&(name, weight)| CatalogEntry::new(name, weight))
        .collect()
}
