use super::{ConfigError, DrawError, StorageError};

/// Top-level error for every fallible operation in the workspace.
#[derive(Debug, thiserror::Error)]
pub enum FortunaError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("draw error: {0}")]
    Draw(#[from] DrawError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("nothing to save: no item has been drawn in this session")]
    NothingToSave,
}

impl FortunaError {
    /// True for failures of the persisted store, which read paths may degrade past.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}
