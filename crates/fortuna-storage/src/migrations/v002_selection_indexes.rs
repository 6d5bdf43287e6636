//! v002: indexes for date-window queries and per-date lookups.

pub const MIGRATION_SQL: &str = "
CREATE INDEX IF NOT EXISTS idx_selections_date ON selections(selection_date);
CREATE INDEX IF NOT EXISTS idx_selections_timestamp ON selections(timestamp);
CREATE INDEX IF NOT EXISTS idx_selections_item ON selections(item);
";
