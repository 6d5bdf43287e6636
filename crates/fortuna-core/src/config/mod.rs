pub mod catalog_config;
pub mod defaults;
pub mod observability_config;
pub mod selection_config;
pub mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use catalog_config::CatalogConfig;
pub use observability_config::ObservabilityConfig;
pub use selection_config::SelectionConfig;
pub use storage_config::StorageConfig;

use crate::errors::ConfigError;
use crate::models::Catalog;

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FortunaConfig {
    pub storage: StorageConfig,
    pub selection: SelectionConfig,
    pub observability: ObservabilityConfig,
    pub catalog: CatalogConfig,
}

impl FortunaConfig {
    /// Parse a TOML document. Missing sections and fields take defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseFailed {
            message: e.to_string(),
        })
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml(&raw)
    }

    /// Validated catalog described by the `[catalog]` section.
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        self.catalog.build()
    }
}
