mod config_error;
mod draw_error;
mod fortuna_error;
mod storage_error;

pub use config_error::ConfigError;
pub use draw_error::DrawError;
pub use fortuna_error::FortunaError;
pub use storage_error::StorageError;

/// Convenience alias used across the workspace.
pub type FortunaResult<T> = Result<T, FortunaError>;
