//! # Store Errors
//!
//! Error types for the item store.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Item store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Candidate item failed validation
    #[error("{0}")]
    Validation(String),

    /// An item with the requested id already exists
    #[error("an item with the ID {0:?} already exists")]
    Conflict(String),

    /// No item with the requested id
    #[error("there is no item with the ID {0:?}")]
    NotFound(String),

    /// Store state is unusable (poisoned lock)
    #[error("store error: {0}")]
    Internal(String),
}

impl StoreError {
    pub(crate) fn lock_poisoned() -> Self {
        StoreError::Internal("Lock poisoned".to_string())
    }
}
