use chrono::{NaiveDate, NaiveTime};
use fortuna_core::constants::AVOID_RECENT_FLOOR;
use fortuna_core::models::{Catalog, SelectionMode, SelectionRecord};
use fortuna_core::traits::IWeightCalculator;
use fortuna_weights::{Drawer, WeightEngine};
use proptest::prelude::*;

const NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

fn arb_mode() -> impl Strategy<Value = SelectionMode> {
    prop_oneof![
        Just(SelectionMode::Normal),
        Just(SelectionMode::AvoidRecent),
        Just(SelectionMode::VarietyBoost),
    ]
}

fn make_records(picks: &[usize]) -> Vec<SelectionRecord> {
    let day = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    picks
        .iter()
        .enumerate()
        .map(|(i, &p)| SelectionRecord {
            id: i as i64,
            item: NAMES[p].to_string(),
            selection_date: day,
            timestamp: day.and_time(NaiveTime::from_hms_opt(0, 0, i as u32 % 60).unwrap()),
        })
        .collect()
}

proptest! {
    #[test]
    fn weights_are_catalog_length_and_non_negative(
        mode in arb_mode(),
        base in prop::collection::vec(0.0f64..10.0, 1..=NAMES.len()),
        picks in prop::collection::vec(0usize..NAMES.len(), 0..30),
    ) {
        let catalog = Catalog::from_parts(&NAMES[..base.len()], &base).unwrap();
        let weights = WeightEngine::new().compute_weights(mode, &catalog, &make_records(&picks));
        prop_assert_eq!(weights.len(), catalog.len());
        prop_assert!(weights.iter().all(|w| w.is_finite() && *w >= 0.0));
    }

    #[test]
    fn variety_boost_stays_between_forty_percent_and_full(
        base in prop::collection::vec(0.0f64..10.0, NAMES.len()),
        picks in prop::collection::vec(0usize..NAMES.len(), 1..30),
    ) {
        let catalog = Catalog::from_parts(&NAMES, &base).unwrap();
        let weights = WeightEngine::new()
            .compute_weights(SelectionMode::VarietyBoost, &catalog, &make_records(&picks));
        for (w, b) in weights.iter().zip(&base) {
            prop_assert!(*w <= *b + 1e-12);
            prop_assert!(*w >= b * 0.4 - 1e-12);
        }
        for (i, b) in base.iter().enumerate() {
            if !picks.contains(&i) {
                prop_assert_eq!(weights[i], *b);
            }
        }
    }

    #[test]
    fn avoid_recent_assigns_floor_exactly_to_picked_items(
        base in prop::collection::vec(0.0f64..10.0, NAMES.len()),
        picks in prop::collection::vec(0usize..NAMES.len(), 0..10),
    ) {
        let catalog = Catalog::from_parts(&NAMES, &base).unwrap();
        let weights = WeightEngine::new()
            .compute_weights(SelectionMode::AvoidRecent, &catalog, &make_records(&picks));
        for (i, w) in weights.iter().enumerate() {
            if picks.contains(&i) {
                prop_assert_eq!(*w, AVOID_RECENT_FLOOR);
            } else {
                prop_assert_eq!(*w, base[i]);
            }
        }
    }

    #[test]
    fn draw_only_returns_positive_weight_indices(
        seed in any::<u64>(),
        base in prop::collection::vec(prop_oneof![Just(0.0f64), 0.01f64..5.0], NAMES.len()),
    ) {
        prop_assume!(base.iter().any(|w| *w > 0.0));
        let catalog = Catalog::from_parts(&NAMES, &base).unwrap();
        let mut drawer = Drawer::seeded(seed);
        let draw = drawer.draw(&catalog, SelectionMode::Normal, base.clone()).unwrap();
        prop_assert!(base[draw.index] > 0.0);
    }
}
