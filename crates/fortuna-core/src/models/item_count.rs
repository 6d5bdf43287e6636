use serde::{Deserialize, Serialize};

/// Total number of stored selections for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCount {
    pub item: String,
    pub count: usize,
}
