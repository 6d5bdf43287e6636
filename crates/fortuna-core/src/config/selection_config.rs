use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::HISTORY_DISPLAY_DAYS;
use crate::models::SelectionMode;

/// Selection behaviour a new session starts with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Mode used until the caller picks another one.
    pub default_mode: SelectionMode,
    /// Days of history returned for display.
    pub history_display_days: u32,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            default_mode: defaults::DEFAULT_MODE,
            history_display_days: HISTORY_DISPLAY_DAYS,
        }
    }
}
