//! # fortuna-weights
//!
//! Turns a selection mode plus recent history into a weight vector, and
//! draws one catalog item from it.
//! Modes: normal (identity), avoid-recent (fixed floor for anything picked
//! in the lookback window), variety-boost (count-proportional penalty with
//! a floor at a fraction of base weight).

pub mod draw;
pub mod engine;
pub mod formula;
pub mod history;
pub mod modes;

pub use draw::{draw_index, validate_weights, Drawer};
pub use engine::WeightEngine;
pub use formula::WeightBreakdown;
pub use history::RecentHistory;
