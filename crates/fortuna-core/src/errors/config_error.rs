/// Invalid catalog or configuration detected at startup.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("catalog has no items")]
    EmptyCatalog,

    #[error("catalog has {items} items but {weights} base weights")]
    LengthMismatch { items: usize, weights: usize },

    #[error("duplicate catalog item: {name}")]
    DuplicateItem { name: String },

    #[error("catalog item at index {index} has an empty name")]
    EmptyItemName { index: usize },

    #[error("invalid base weight for {item}: {weight} (must be finite and >= 0)")]
    InvalidWeight { item: String, weight: f64 },

    #[error("unknown selection mode: {name}")]
    UnknownMode { name: String },

    #[error("failed to parse config: {message}")]
    ParseFailed { message: String },

    #[error("failed to read config file {path}: {message}")]
    ReadFailed { path: String, message: String },
}
