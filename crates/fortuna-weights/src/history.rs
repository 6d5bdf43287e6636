use std::collections::HashMap;

use fortuna_core::models::SelectionRecord;

/// Occurrence counts over the records in the lookback window.
#[derive(Debug, Clone, Default)]
pub struct RecentHistory {
    counts: HashMap<String, usize>,
    max_count: usize,
}

impl RecentHistory {
    /// Tally `records`. Items outside the catalog still count toward
    /// `max_count`; they simply never receive a weight.
    pub fn from_records(records: &[SelectionRecord]) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for record in records {
            *counts.entry(record.item.clone()).or_default() += 1;
        }
        let max_count = counts.values().copied().max().unwrap_or(1);
        Self { counts, max_count }
    }

    pub fn count(&self, item: &str) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.counts.contains_key(item)
    }

    /// Highest per-item count, or 1 when there is no history.
    pub fn max_count(&self) -> usize {
        self.max_count.max(1)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
