//! Structured log events for key picker operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a completed draw.
pub fn selection_drawn(item: &str, mode: &str, probability: f64) {
    tracing::info!(
        event = "selection_drawn",
        item = %item,
        mode = %mode,
        probability = probability,
        "selection drawn"
    );
}

/// Log a first save for a date.
pub fn selection_saved(item: &str, date: &str) {
    tracing::info!(
        event = "selection_saved",
        item = %item,
        date = %date,
        "selection saved"
    );
}

/// Log a save that replaced an earlier pick for the same date.
pub fn selection_overwritten(item: &str, previous: &str, date: &str) {
    tracing::info!(
        event = "selection_overwritten",
        item = %item,
        previous = %previous,
        date = %date,
        "selection overwritten"
    );
}

/// Log a save the caller chose not to apply over an existing pick.
pub fn overwrite_declined(item: &str, existing: &str, date: &str) {
    tracing::info!(
        event = "overwrite_declined",
        item = %item,
        existing = %existing,
        date = %date,
        "overwrite declined"
    );
}

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}
