mod clock;
mod history_store;
mod weight_calculator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use history_store::IHistoryStore;
pub use weight_calculator::IWeightCalculator;
