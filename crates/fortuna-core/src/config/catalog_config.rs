use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::models::{Catalog, CatalogEntry};

/// The static item list. Supplying `[[catalog.items]]` replaces the whole
/// default list; entries are never merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub items: Vec<CatalogEntry>,
}

impl CatalogConfig {
    /// Validate into an immutable [`Catalog`].
    pub fn build(&self) -> Result<Catalog, ConfigError> {
        Catalog::new(self.items.clone())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            items: defaults::default_catalog_entries(),
        }
    }
}
