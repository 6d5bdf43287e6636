use fortuna_core::constants::LOOKBACK_DAYS;
use fortuna_core::models::{Catalog, SelectionMode, SelectionRecord};
use fortuna_core::traits::IWeightCalculator;

use crate::formula::{self, WeightBreakdown};
use crate::history::RecentHistory;

/// Stateless weight calculator. Holds only the lookback horizon the caller
/// should use when fetching history.
#[derive(Debug, Clone, Copy)]
pub struct WeightEngine {
    lookback_days: u32,
}

impl WeightEngine {
    pub fn new() -> Self {
        Self {
            lookback_days: LOOKBACK_DAYS,
        }
    }

    /// Days of history that count as recent (fixed at 7).
    pub fn lookback_days(&self) -> u32 {
        self.lookback_days
    }

    /// Compute weights with a per-item breakdown.
    pub fn compute_breakdown(
        &self,
        mode: SelectionMode,
        catalog: &Catalog,
        recent: &[SelectionRecord],
    ) -> Vec<WeightBreakdown> {
        formula::compute_breakdown(mode, catalog, &RecentHistory::from_records(recent))
    }
}

impl Default for WeightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IWeightCalculator for WeightEngine {
    fn compute_weights(
        &self,
        mode: SelectionMode,
        catalog: &Catalog,
        recent: &[SelectionRecord],
    ) -> Vec<f64> {
        let history = RecentHistory::from_records(recent);
        let weights = formula::compute(mode, catalog, &history);
        tracing::trace!(mode = %mode, recent = recent.len(), weights = ?weights, "weights computed");
        weights
    }
}
