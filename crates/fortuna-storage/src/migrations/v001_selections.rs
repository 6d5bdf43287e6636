//! v001: the selections log.
//!
//! `IF NOT EXISTS` lets a database created before versioning was added be
//! adopted as-is.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS selections (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    item            TEXT NOT NULL,
    selection_date  TEXT NOT NULL,
    timestamp       TEXT NOT NULL
);
";
