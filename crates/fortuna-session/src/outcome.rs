use chrono::NaiveDate;

use fortuna_core::models::SelectionRecord;

/// What a call to `Session::save` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// First pick stored for `date`.
    Saved { item: String, date: NaiveDate },
    /// Replaced `previous` after the caller confirmed.
    Overwritten {
        item: String,
        date: NaiveDate,
        previous: SelectionRecord,
    },
    /// The caller declined to replace `existing`; nothing was written.
    Declined { existing: SelectionRecord },
}

impl SaveOutcome {
    /// True if the store was modified.
    pub fn persisted(&self) -> bool {
        !matches!(self, Self::Declined { .. })
    }
}
