use fortuna_core::constants::AVOID_RECENT_FLOOR;

/// Avoid-recent weight.
///
/// Any item picked inside the lookback window gets exactly
/// `AVOID_RECENT_FLOOR` (0.1), whatever its base weight. The floor is
/// non-zero so a recent pick stays reachable.
pub fn calculate(base_weight: f64, picked_recently: bool) -> f64 {
    if picked_recently {
        AVOID_RECENT_FLOOR
    } else {
        base_weight
    }
}
