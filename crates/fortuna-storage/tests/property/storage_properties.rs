use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Days, NaiveDate, NaiveTime};
use fortuna_core::traits::{FixedClock, IHistoryStore};
use fortuna_storage::HistoryEngine;
use proptest::prelude::*;

const ITEMS: [&str; 4] = ["PC", "PS5", "Book", "Anime"];

fn base_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn upserts_keep_one_record_per_date(
        saves in prop::collection::vec((0u64..10, 0usize..ITEMS.len(), 0u32..86_400), 1..40),
    ) {
        let store = HistoryEngine::open_in_memory()
            .unwrap()
            .with_clock(Arc::new(FixedClock(base_day().and_hms_opt(23, 0, 0).unwrap())));

        let mut dates = HashSet::new();
        for (offset, item, secs) in &saves {
            let day = base_day().checked_sub_days(Days::new(*offset)).unwrap();
            let ts = day.and_time(NaiveTime::from_num_seconds_from_midnight_opt(*secs, 0).unwrap());
            store.upsert_for_date(ITEMS[*item], day, ts).unwrap();
            dates.insert(day);
        }

        let recent = store.query_recent(30).unwrap();
        prop_assert_eq!(recent.len(), dates.len());
        let distinct: HashSet<_> = recent.iter().map(|r| r.selection_date).collect();
        prop_assert_eq!(distinct.len(), recent.len());
        prop_assert!(recent.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[test]
    fn query_recent_respects_window(days_back in 0u32..15, offsets in prop::collection::vec(0u64..20, 0..20)) {
        let store = HistoryEngine::open_in_memory()
            .unwrap()
            .with_clock(Arc::new(FixedClock(base_day().and_hms_opt(8, 0, 0).unwrap())));
        for offset in &offsets {
            let day = base_day().checked_sub_days(Days::new(*offset)).unwrap();
            store.upsert_for_date("PC", day, day.and_hms_opt(12, 0, 0).unwrap()).unwrap();
        }
        let cutoff = base_day().checked_sub_days(Days::new(u64::from(days_back))).unwrap();
        for record in store.query_recent(days_back).unwrap() {
            prop_assert!(record.selection_date >= cutoff);
        }
        let expected: HashSet<_> = offsets.iter().filter(|o| **o <= u64::from(days_back)).collect();
        prop_assert_eq!(store.query_recent(days_back).unwrap().len(), expected.len());
    }
}
