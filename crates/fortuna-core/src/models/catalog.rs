use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::errors::ConfigError;

/// One selectable item and its static base weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub weight: f64,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// Fixed, ordered list of selectable items.
///
/// Index `i` of every weight vector in the system refers to `entries[i]`.
/// The entries are private and there is no mutating API, so the
/// item/weight correspondence cannot change once a catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting empty lists, blank or duplicate names,
    /// and negative or non-finite weights. A weight of exactly zero is legal.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        let mut seen = HashSet::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::EmptyItemName { index });
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(ConfigError::DuplicateItem {
                    name: entry.name.clone(),
                });
            }
            if !entry.weight.is_finite() || entry.weight < 0.0 {
                return Err(ConfigError::InvalidWeight {
                    item: entry.name.clone(),
                    weight: entry.weight,
                });
            }
        }
        Ok(Self { entries })
    }

    /// Build a catalog from parallel name and weight lists.
    pub fn from_parts<S: AsRef<str>>(names: &[S], weights: &[f64]) -> Result<Self, ConfigError> {
        if names.len() != weights.len() {
            return Err(ConfigError::LengthMismatch {
                items: names.len(),
                weights: weights.len(),
            });
        }
        let entries = names
            .iter()
            .zip(weights)
            .map(|(name, &weight)| CatalogEntry::new(name.as_ref(), weight))
            .collect();
        Self::new(entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// Item names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Base weights in catalog order.
    pub fn base_weights(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.weight).collect()
    }

    /// Catalog index of an item, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            entries: defaults::default_catalog_entries(),
        }
    }
}
