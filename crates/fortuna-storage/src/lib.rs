//! # fortuna-storage
//!
//! SQLite persistence for the selection history.
//! One write connection, a read-only pool for file-backed databases,
//! versioned migrations, and the `IHistoryStore` implementation.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::HistoryEngine;

use fortuna_core::errors::{FortunaError, StorageError};

/// Wrap a message as a storage-layer `FortunaError`.
pub(crate) fn to_storage_err(message: impl Into<String>) -> FortunaError {
    StorageError::SqliteError {
        message: message.into(),
    }
    .into()
}

/// A stored row that cannot be decoded.
pub(crate) fn to_corruption_err(details: impl Into<String>) -> FortunaError {
    StorageError::CorruptionDetected {
        details: details.into(),
    }
    .into()
}
