use serde::{Deserialize, Serialize};

use super::SelectionMode;

/// Result of a single weighted-random draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draw {
    /// Catalog index of the chosen item.
    pub index: usize,
    pub item: String,
    pub mode: SelectionMode,
    /// The weight vector the draw was made from, index-aligned with the catalog.
    pub weights: Vec<f64>,
}

impl Draw {
    /// Probability the chosen item had under `weights`.
    pub fn probability(&self) -> f64 {
        let total: f64 = self.weights.iter().sum();
        if total > 0.0 {
            self.weights.get(self.index).copied().unwrap_or(0.0) / total
        } else {
            0.0
        }
    }
}
