use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::{DATE_FORMAT, TIMESTAMP_FORMAT};

/// One persisted selection. Immutable once stored; a later save on the same
/// date deletes and replaces it rather than editing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRecord {
    /// Auto-increment row id assigned by the store.
    pub id: i64,
    pub item: String,
    pub selection_date: NaiveDate,
    pub timestamp: NaiveDateTime,
}

impl SelectionRecord {
    /// `selection_date` in its `YYYY-MM-DD` storage form.
    pub fn date_string(&self) -> String {
        self.selection_date.format(DATE_FORMAT).to_string()
    }

    /// `timestamp` in its ISO 8601 storage form.
    pub fn timestamp_string(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}
