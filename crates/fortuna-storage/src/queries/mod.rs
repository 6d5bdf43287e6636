pub mod aggregation;
pub mod selection_ops;
