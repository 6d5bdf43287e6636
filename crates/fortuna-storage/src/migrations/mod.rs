//! Versioned schema migrations tracked in the `schema_version` table.

pub mod v001_selections;
pub mod v002_selection_indexes;

use rusqlite::{params, Connection};

use fortuna_core::errors::{FortunaResult, StorageError};

use crate::to_storage_err;

/// Latest schema version this build knows how to create.
pub const LATEST_VERSION: u32 = 2;

const MIGRATIONS: &[(&str, u32)] = &[
    (v001_selections::MIGRATION_SQL, 1),
    (v002_selection_indexes::MIGRATION_SQL, LATEST_VERSION),
];

fn migration_failed(version: u32, reason: impl Into<String>) -> StorageError {
    StorageError::MigrationFailed {
        version,
        reason: reason.into(),
    }
}

/// Run all pending migrations.
pub fn run_migrations(conn: &Connection) -> FortunaResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| migration_failed(0, e.to_string()))?;

    let current = current_version(conn)?;
    if current > LATEST_VERSION {
        return Err(migration_failed(
            current,
            format!("schema is newer than this build supports (latest {LATEST_VERSION})"),
        )
        .into());
    }

    for &(sql, version) in MIGRATIONS {
        if current >= version {
            continue;
        }
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| migration_failed(version, e.to_string()))?;
        tx.execute_batch(sql)
            .map_err(|e| migration_failed(version, e.to_string()))?;
        tx.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            params![version],
        )
        .map_err(|e| migration_failed(version, e.to_string()))?;
        tx.commit()
            .map_err(|e| migration_failed(version, e.to_string()))?;
        tracing::info!(version = version, "applied migration");
    }

    Ok(())
}

/// Get the current schema version (0 for a fresh database).
pub fn current_version(conn: &Connection) -> FortunaResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
