use crate::models::{Catalog, SelectionMode, SelectionRecord};

/// Turns a mode and recent history into a weight vector.
pub trait IWeightCalculator: Send + Sync {
    /// Weights index-aligned with `catalog`, all finite and non-negative.
    fn compute_weights(
        &self,
        mode: SelectionMode,
        catalog: &Catalog,
        recent: &[SelectionRecord],
    ) -> Vec<f64>;
}
