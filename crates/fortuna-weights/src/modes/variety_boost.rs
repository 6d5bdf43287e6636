use fortuna_core::constants::{VARIETY_FLOOR_RATIO, VARIETY_MAX_PENALTY};

/// Variety-boost weight.
///
/// ```text
/// penalty  = (count / max_count) × 0.6
/// adjusted = base × (1 − penalty)
/// weight   = max(adjusted, base × 0.2)
/// ```
///
/// Range: `base × 0.4` (most-picked item) to `base` (not picked).
pub fn calculate(base_weight: f64, count: usize, max_count: usize) -> f64 {
    let penalty = penalty(count, max_count);
    let adjusted = base_weight * (1.0 - penalty);
    adjusted.max(base_weight * VARIETY_FLOOR_RATIO)
}

/// Fraction of base weight removed for an item picked `count` times.
pub fn penalty(count: usize, max_count: usize) -> f64 {
    let max_count = max_count.max(1) as f64;
    (count as f64 / max_count).min(1.0) * VARIETY_MAX_PENALTY
}
