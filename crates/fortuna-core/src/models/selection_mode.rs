use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Which weighting transform to apply to a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Base weights unchanged.
    #[default]
    Normal,
    /// Anything picked in the lookback window drops to a fixed floor weight.
    AvoidRecent,
    /// Frequently picked items are penalised in proportion to their count.
    VarietyBoost,
}

impl SelectionMode {
    pub const ALL: [SelectionMode; 3] = [
        SelectionMode::Normal,
        SelectionMode::AvoidRecent,
        SelectionMode::VarietyBoost,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::AvoidRecent => "avoid_recent",
            Self::VarietyBoost => "variety_boost",
        }
    }

    /// Whether this mode reads selection history.
    pub fn uses_history(self) -> bool {
        !matches!(self, Self::Normal)
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "avoid_recent" => Ok(Self::AvoidRecent),
            "variety_boost" => Ok(Self::VarietyBoost),
            _ => Err(ConfigError::UnknownMode { name: s.to_string() }),
        }
    }
}
