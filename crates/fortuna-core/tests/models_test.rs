use chrono::{NaiveDate, NaiveTime};
use fortuna_core::errors::ConfigError;
use fortuna_core::models::*;

#[test]
fn catalog_rejects_empty_list() {
    assert_eq!(Catalog::new(vec![]), Err(ConfigError::EmptyCatalog));
}

#[test]
fn catalog_rejects_length_mismatch() {
    let err = Catalog::from_parts(&["A", "B", "C"], &[1.0, 1.0]).unwrap_err();
    assert_eq!(
        err,
        ConfigError::LengthMismatch {
            items: 3,
            weights: 2
        }
    );
}

#[test]
fn catalog_rejects_duplicates_and_blank_names() {
    assert!(matches!(
        Catalog::from_parts(&["A", "A"], &[1.0, 1.0]),
        Err(ConfigError::DuplicateItem { .. })
    ));
    assert!(matches!(
        Catalog::from_parts(&["A", " "], &[1.0, 1.0]),
        Err(ConfigError::EmptyItemName { index: 1 })
    ));
}

#[test]
fn catalog_rejects_negative_and_nan_weights() {
    assert!(Catalog::from_parts(&["A"], &[-0.1]).is_err());
    assert!(Catalog::from_parts(&["A"], &[f64::NAN]).is_err());
    assert!(Catalog::from_parts(&["A"], &[f64::INFINITY]).is_err());
}

#[test]
fn catalog_accepts_zero_weight() {
    let catalog = Catalog::from_parts(&["A", "B"], &[0.0, 1.0]).unwrap();
    assert_eq!(catalog.base_weights(), vec![0.0, 1.0]);
}

#[test]
fn catalog_index_lookup_is_stable() {
    let catalog = Catalog::from_parts(&["A", "B", "C"], &[1.0, 2.0, 3.0]).unwrap();
    for (i, name) in catalog.names().enumerate() {
        assert_eq!(catalog.index_of(name), Some(i));
        assert_eq!(catalog.get(i).unwrap().weight, (i + 1) as f64);
    }
    assert!(!catalog.contains("D"));
}

#[test]
fn default_catalog_matches_validated_defaults() {
    let catalog = Catalog::default();
    let rebuilt = Catalog::new(catalog.entries().to_vec()).unwrap();
    assert_eq!(catalog, rebuilt);
}

#[test]
fn selection_mode_parses_its_text_forms() {
    for mode in SelectionMode::ALL {
        assert_eq!(mode.as_str().parse::<SelectionMode>().unwrap(), mode);
    }
    assert_eq!(
        " Avoid_Recent ".parse::<SelectionMode>().unwrap(),
        SelectionMode::AvoidRecent
    );
    assert!("random".parse::<SelectionMode>().is_err());
    assert!(!SelectionMode::Normal.uses_history());
    assert!(SelectionMode::VarietyBoost.uses_history());
}

#[test]
fn selection_record_formats_iso_strings() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    let record = SelectionRecord {
        id: 1,
        item: "Book".into(),
        selection_date: date,
        timestamp: date.and_time(NaiveTime::from_hms_micro_opt(7, 5, 3, 42).unwrap()),
    };
    assert_eq!(record.date_string(), "2024-03-09");
    assert_eq!(record.timestamp_string(), "2024-03-09T07:05:03.000042");
}

#[test]
fn draw_probability_reflects_weights() {
    let draw = Draw {
        index: 1,
        item: "B".into(),
        mode: SelectionMode::Normal,
        weights: vec![1.0, 3.0],
    };
    assert!((draw.probability() - 0.75).abs() < f64::EPSILON);
}
