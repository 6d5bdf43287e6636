use chrono::{NaiveDate, NaiveDateTime};

use crate::errors::FortunaResult;
use crate::models::{ItemCount, SelectionRecord};
use crate::traits::Clock;

/// Durable log of past selections.
///
/// The store keeps records exactly as written. Only `upsert_for_date`
/// enforces one record per calendar date; `record_selection` is a raw insert.
pub trait IHistoryStore: Send + Sync {
    /// Clock that defines "today" for `query_recent`. Callers stamping new
    /// records should read time from here so both agree on the date.
    fn clock(&self) -> &dyn Clock;

    // --- Writes ---
    /// Insert a record and return its row id. No deduplication.
    fn record_selection(
        &self,
        item: &str,
        date: NaiveDate,
        timestamp: NaiveDateTime,
    ) -> FortunaResult<i64>;

    /// Delete every record for `date`. Returns how many were removed.
    fn delete_by_date(&self, date: NaiveDate) -> FortunaResult<usize>;

    /// Atomically replace whatever is stored for `date` with one new record.
    /// Returns the records that were superseded (empty for a first save).
    fn upsert_for_date(
        &self,
        item: &str,
        date: NaiveDate,
        timestamp: NaiveDateTime,
    ) -> FortunaResult<Vec<SelectionRecord>>;

    // --- Queries ---
    /// Most recent record stored for `date`.
    fn find_by_date(&self, date: NaiveDate) -> FortunaResult<Option<SelectionRecord>>;

    /// Records dated on or after `today - days_back`, newest timestamp first.
    fn query_recent(&self, days_back: u32) -> FortunaResult<Vec<SelectionRecord>>;

    /// Records dated on or after `cutoff`, newest timestamp first.
    fn query_since(&self, cutoff: NaiveDate) -> FortunaResult<Vec<SelectionRecord>>;

    // --- Aggregation ---
    /// Total count per item, highest count first, ties by item name.
    fn count_by_item(&self) -> FortunaResult<Vec<ItemCount>>;

    /// Number of stored records.
    fn count_all(&self) -> FortunaResult<usize>;
}
