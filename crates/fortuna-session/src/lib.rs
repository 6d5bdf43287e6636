//! # fortuna-session
//!
//! The object a presentation layer drives: it remembers the current mode
//! and the last draw, fetches recent history for the weighting engine, and
//! saves draws with an explicit same-day overwrite decision.
//!
//! ## Modules
//!
//! - `session`: `Session` with draw, save, history, and statistics
//! - `overwrite`: `OverwriteConfirm` hook and the fixed `OverwritePolicy`
//! - `outcome`: `SaveOutcome` describing what a save did

pub mod outcome;
pub mod overwrite;
pub mod session;

pub use outcome::SaveOutcome;
pub use overwrite::{OverwriteConfirm, OverwritePolicy};
pub use session::Session;
