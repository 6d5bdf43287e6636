use fortuna_core::errors::*;

#[test]
fn draw_error_length_mismatch_carries_both_lengths() {
    let err = DrawError::LengthMismatch {
        weights: 2,
        catalog: 3,
    };
    let msg = err.to_string();
    assert!(msg.contains('2'));
    assert!(msg.contains('3'));
}

#[test]
fn config_error_duplicate_item_carries_name() {
    let err = ConfigError::DuplicateItem {
        name: "Book".into(),
    };
    assert!(err.to_string().contains("Book"));
}

#[test]
fn config_error_invalid_weight_carries_item_and_value() {
    let err = ConfigError::InvalidWeight {
        item: "PS5".into(),
        weight: -0.5,
    };
    let msg = err.to_string();
    assert!(msg.contains("PS5"));
    assert!(msg.contains("-0.5"));
}

// --- From impls ---

#[test]
fn storage_error_converts_to_fortuna_error() {
    let storage_err = StorageError::SqliteError {
        message: "disk full".into(),
    };
    let err: FortunaError = storage_err.into();
    assert!(err.is_storage());
    assert!(err.to_string().contains("disk full"));
}

#[test]
fn draw_error_converts_to_fortuna_error() {
    let err: FortunaError = DrawError::ZeroTotal.into();
    assert!(matches!(err, FortunaError::Draw(DrawError::ZeroTotal)));
    assert!(!err.is_storage());
}

#[test]
fn config_error_converts_to_fortuna_error() {
    let err: FortunaError = ConfigError::EmptyCatalog.into();
    assert!(matches!(err, FortunaError::Config(ConfigError::EmptyCatalog)));
}

#[test]
fn nothing_to_save_has_readable_message() {
    let msg = FortunaError::NothingToSave.to_string();
    assert!(msg.contains("nothing to save"));
}
