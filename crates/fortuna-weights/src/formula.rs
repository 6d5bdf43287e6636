use fortuna_core::models::{Catalog, SelectionMode};

use crate::history::RecentHistory;
use crate::modes;

/// Weight for every catalog item under `mode`, index-aligned with `catalog`.
///
/// With no recent history every mode reduces to the base weights.
pub fn compute(mode: SelectionMode, catalog: &Catalog, history: &RecentHistory) -> Vec<f64> {
    catalog
        .entries()
        .iter()
        .map(|entry| item_weight(mode, entry.weight, &entry.name, history))
        .collect()
}

fn item_weight(mode: SelectionMode, base: f64, item: &str, history: &RecentHistory) -> f64 {
    if history.is_empty() {
        return modes::normal::calculate(base);
    }
    match mode {
        SelectionMode::Normal => modes::normal::calculate(base),
        SelectionMode::AvoidRecent => modes::avoid_recent::calculate(base, history.contains(item)),
        SelectionMode::VarietyBoost => {
            modes::variety_boost::calculate(base, history.count(item), history.max_count())
        }
    }
}

/// One item's weight and the inputs that produced it, for display.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightBreakdown {
    pub item: String,
    pub base_weight: f64,
    pub recent_count: usize,
    /// Relative change from base to final weight; negative when a floor raised it.
    pub penalty: f64,
    pub final_weight: f64,
    /// `final_weight` as a share of the whole vector (0 when it sums to 0).
    pub probability: f64,
}

/// Compute weights with a per-item breakdown.
pub fn compute_breakdown(
    mode: SelectionMode,
    catalog: &Catalog,
    history: &RecentHistory,
) -> Vec<WeightBreakdown> {
    let weights = compute(mode, catalog, history);
    let total: f64 = weights.iter().sum();

    catalog
        .entries()
        .iter()
        .zip(weights)
        .map(|(entry, final_weight)| WeightBreakdown {
            item: entry.name.clone(),
            base_weight: entry.weight,
            recent_count: history.count(&entry.name),
            penalty: if entry.weight > 0.0 { 1.0 - final_weight / entry.weight } else { 0.0 },
            final_weight,
            probability: if total > 0.0 { final_weight / total } else { 0.0 },
        })
        .collect()
}
