//! Item records and create candidates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored item.
///
/// `timestamp` is assigned by the store on creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub timestamp: DateTime<Utc>,
}

/// Candidate for creation.
///
/// A missing, `null` or empty `id` asks the store to generate one. Unknown
/// fields (including a client-supplied `timestamp`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
}

impl NewItem {
    /// Candidate with a generated id
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Candidate with a caller-supplied id
    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
        }
    }

    /// The requested id, if one was actually given
    pub fn requested_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}
