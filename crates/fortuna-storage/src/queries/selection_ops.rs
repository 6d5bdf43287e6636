//! Insert, delete, upsert, and date-window reads for selection records.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rusqlite::{params, Connection};

use fortuna_core::constants::{DATE_FORMAT, TIMESTAMP_FORMAT};
use fortuna_core::errors::FortunaResult;
use fortuna_core::models::SelectionRecord;

use crate::{to_corruption_err, to_storage_err};

const SELECT_COLUMNS: &str = "SELECT id, item, selection_date, timestamp FROM selections";

type RawRow = (i64, String, String, String);

fn date_text(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn timestamp_text(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Decode a raw row. A date that does not parse means the file was written
/// by something else or damaged. An unreadable timestamp is only display
/// data, so it falls back to the start of the row's date.
fn decode((id, item, date, timestamp): RawRow) -> FortunaResult<SelectionRecord> {
    let selection_date = NaiveDate::parse_from_str(&date, DATE_FORMAT)
        .map_err(|e| to_corruption_err(format!("row {id}: bad selection_date {date:?}: {e}")))?;
    let timestamp = match timestamp.parse::<NaiveDateTime>() {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!(
                row = id,
                raw = %timestamp,
                error = %e,
                "unreadable timestamp, using start of day"
            );
            selection_date.and_time(NaiveTime::MIN)
        }
    };
    Ok(SelectionRecord {
        id,
        item,
        selection_date,
        timestamp,
    })
}

fn query_raw<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> FortunaResult<Vec<RawRow>> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params, |row| -> rusqlite::Result<RawRow> {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

fn query_records<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> FortunaResult<Vec<SelectionRecord>> {
    query_raw(conn, sql, params)?.into_iter().map(decode).collect()
}

fn by_date_sql() -> String {
    format!("{SELECT_COLUMNS} WHERE selection_date = ?1 ORDER BY timestamp DESC, id DESC")
}

/// Insert one record and return its row id.
pub fn insert_selection(
    conn: &Connection,
    item: &str,
    date: NaiveDate,
    timestamp: NaiveDateTime,
) -> FortunaResult<i64> {
    conn.execute(
        "INSERT INTO selections (item, selection_date, timestamp) VALUES (?1, ?2, ?3)",
        params![item, date_text(date), timestamp_text(timestamp)],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(conn.last_insert_rowid())
}

/// Delete every record for `date`.
pub fn delete_by_date(conn: &Connection, date: NaiveDate) -> FortunaResult<usize> {
    conn.execute(
        "DELETE FROM selections WHERE selection_date = ?1",
        params![date_text(date)],
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// All records stored for `date`, newest first.
pub fn get_by_date(conn: &Connection, date: NaiveDate) -> FortunaResult<Vec<SelectionRecord>> {
    query_records(conn, &by_date_sql(), params![date_text(date)])
}

/// Records dated on or after `cutoff`, newest timestamp first.
pub fn query_since(conn: &Connection, cutoff: NaiveDate) -> FortunaResult<Vec<SelectionRecord>> {
    query_records(
        conn,
        &format!("{SELECT_COLUMNS} WHERE selection_date >= ?1 ORDER BY timestamp DESC, id DESC"),
        params![date_text(cutoff)],
    )
}

/// Replace everything stored for `date` with a single record.
/// Delete and insert share one transaction, so a concurrent writer can
/// never observe or leave two records for the same date.
pub fn upsert_for_date(
    conn: &Connection,
    item: &str,
    date: NaiveDate,
    timestamp: NaiveDateTime,
) -> FortunaResult<Vec<SelectionRecord>> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("upsert_for_date begin: {e}")))?;

    let result = upsert_inner(&tx, item, date, timestamp);

    match result {
        Ok(superseded) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("upsert_for_date commit: {e}")))?;
            Ok(superseded)
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

/// Inner upsert logic, operating on the provided connection (or transaction via Deref).
/// Superseded rows that cannot be decoded are still deleted, just not returned.
fn upsert_inner(
    conn: &Connection,
    item: &str,
    date: NaiveDate,
    timestamp: NaiveDateTime,
) -> FortunaResult<Vec<SelectionRecord>> {
    let superseded: Vec<SelectionRecord> = query_raw(conn, &by_date_sql(), params![date_text(date)])?
        .into_iter()
        .filter_map(|raw| match decode(raw) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(date = %date, error = %e, "dropping undecodable superseded row");
                None
            }
        })
        .collect();
    delete_by_date(conn, date)?;
    insert_selection(conn, item, date, timestamp)?;
    Ok(superseded)
}
