//! Per-item counts and totals.

use rusqlite::Connection;

use fortuna_core::errors::FortunaResult;
use fortuna_core::models::ItemCount;

use crate::to_storage_err;

/// Count records grouped by item, highest count first.
pub fn count_by_item(conn: &Connection) -> FortunaResult<Vec<ItemCount>> {
    let mut stmt = conn
        .prepare(
            "SELECT item, COUNT(*) AS n FROM selections
             GROUP BY item ORDER BY n DESC, item ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(ItemCount {
                item: row.get(0)?,
                count: row.get::<_, i64>(1)? as usize,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Total number of stored records.
pub fn count_all(conn: &Connection) -> FortunaResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM selections", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}
