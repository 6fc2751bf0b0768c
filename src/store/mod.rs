//! # Item Store
//!
//! In-memory item collection with id uniqueness enforcement and list
//! ordering.

pub mod errors;
pub mod item;
pub mod memory;
pub mod sort;

pub use errors::{StoreError, StoreResult};
pub use item::{Item, NewItem};
pub use memory::ItemStore;
pub use sort::SortKey;
