use fortuna_core::models::SelectionRecord;

/// Asked before a save replaces the pick already stored for today.
/// A desktop front end would show a yes/no dialog here.
pub trait OverwriteConfirm {
    /// Return true to replace `existing` with `replacement`.
    fn confirm_overwrite(&mut self, existing: &SelectionRecord, replacement: &str) -> bool;
}

/// A fixed answer for non-interactive callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    Always,
    Never,
}

impl OverwriteConfirm for OverwritePolicy {
    fn confirm_overwrite(&mut self, _existing: &SelectionRecord, _replacement: &str) -> bool {
        matches!(self, Self::Always)
    }
}

impl<F> OverwriteConfirm for F
where
    F: FnMut(&SelectionRecord, &str) -> bool,
{
    fn confirm_overwrite(&mut self, existing: &SelectionRecord, replacement: &str) -> bool {
        self(existing, replacement)
    }
}
