//! Fixed values shared by the weighting engine and the history store.

/// Horizon, in days, that counts as "recent" for AvoidRecent and VarietyBoost.
pub const LOOKBACK_DAYS: u32 = 7;

/// Window, in days, of history shown alongside the picker.
pub const HISTORY_DISPLAY_DAYS: u32 = 10;

/// Weight given to any item picked inside the lookback window under AvoidRecent.
pub const AVOID_RECENT_FLOOR: f64 = 0.1;

/// Maximum fraction of base weight VarietyBoost removes from the most-picked item.
pub const VARIETY_MAX_PENALTY: f64 = 0.6;

/// VarietyBoost never drops an item below this fraction of its base weight.
pub const VARIETY_FLOOR_RATIO: f64 = 0.2;

/// On-disk format of `selection_date`. Lexical order equals date order.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// On-disk format of `timestamp` (local time, microsecond precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
