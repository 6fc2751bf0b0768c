//! List ordering.

use std::fmt;
use std::str::FromStr;

use super::item::Item;

/// Sort key accepted by the list endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Descending lexicographic id order
    #[default]
    Id,
    /// Ascending creation time
    Timestamp,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Timestamp => "timestamp",
        }
    }

    /// Sort in place. The sort is stable, so items with equal timestamps keep
    /// insertion order.
    pub fn apply(&self, items: &mut [Item]) {
        match self {
            SortKey::Id => items.sort_by(|a, b| b.id.cmp(&a.id)),
            SortKey::Timestamp => items.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortKey::Id),
            "timestamp" => Ok(SortKey::Timestamp),
            other => Err(format!(
                "invalid value {:?} for 'sort' parameter (expected 'id' or 'timestamp')",
                other
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
