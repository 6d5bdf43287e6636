//! Per-item weight transforms, one module per selection mode.

pub mod avoid_recent;
pub mod normal;
pub mod variety_boost;
