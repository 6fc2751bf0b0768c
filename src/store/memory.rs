//! # In-Memory Item Store
//!
//! The single shared collection behind the HTTP API. All access goes through
//! one `RwLock`; the uniqueness check and the append in `create` happen under
//! the same write guard.

use std::sync::RwLock;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::{StoreError, StoreResult};
use super::item::{Item, NewItem};

/// Insertion-ordered item collection
#[derive(Debug, Default)]
pub struct ItemStore {
    items: RwLock<Vec<Item>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every item in insertion order
    pub fn list(&self) -> StoreResult<Vec<Item>> {
        let items = self.items.read().map_err(|_| StoreError::lock_poisoned())?;
        Ok(items.clone())
    }

    /// Number of stored items
    pub fn len(&self) -> StoreResult<usize> {
        let items = self.items.read().map_err(|_| StoreError::lock_poisoned())?;
        Ok(items.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Create an item stamped with the current time
    pub fn create(&self, candidate: NewItem) -> StoreResult<Item> {
        self.create_at(candidate, Utc::now())
    }

    /// Create an item with an explicit creation instant
    pub fn create_at(&self, candidate: NewItem, timestamp: DateTime<Utc>) -> StoreResult<Item> {
        if candidate.name.is_empty() {
            return Err(StoreError::Validation("name is required".to_string()));
        }

        let mut items = self.items.write().map_err(|_| StoreError::lock_poisoned())?;

        let id = match candidate.requested_id() {
            Some(id) => {
                if items.iter().any(|item| item.id == id) {
                    return Err(StoreError::Conflict(id.to_string()));
                }
                id.to_string()
            }
            None => generate_id(&items),
        };

        let item = Item {
            id,
            name: candidate.name,
            timestamp,
        };
        items.push(item.clone());

        tracing::debug!(id = %item.id, count = items.len(), "item created");
        Ok(item)
    }

    /// Look up an item by exact id
    pub fn get(&self, id: &str) -> StoreResult<Item> {
        let items = self.items.read().map_err(|_| StoreError::lock_poisoned())?;
        items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Remove an item by exact id, returning it
    pub fn delete(&self, id: &str) -> StoreResult<Item> {
        let mut items = self.items.write().map_err(|_| StoreError::lock_poisoned())?;

        let index = items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let removed = items.remove(index);

        tracing::debug!(id = %removed.id, count = items.len(), "item deleted");
        Ok(removed)
    }
}

/// Fresh v4 UUID not already used as an id.
///
/// Caller-supplied ids are arbitrary strings, so a collision with a
/// UUID-shaped one is possible in principle.
fn generate_id(items: &[Item]) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !items.iter().any(|item| item.id == id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 1, 1, 12, minute, 0).unwrap()
    }

    fn seeded() -> ItemStore {
        let store = ItemStore::new();
        store.create_at(NewItem::with_id("1", "Item 1"), at(0)).unwrap();
        store.create_at(NewItem::with_id("2", "Item 2"), at(10)).unwrap();
        store.create_at(NewItem::with_id("3", "Item 3"), at(20)).unwrap();
        store
    }

    #[test]
    fn test_get_existing() {
        let store = seeded();

        let item = store.get("2").unwrap();
        assert_eq!(
            item,
            Item {
                id: "2".to_string(),
                name: "Item 2".to_string(),
                timestamp: at(10),
            }
        );
    }

    #[test]
    fn test_get_missing() {
        let store = seeded();
        assert_eq!(store.get("5"), Err(StoreError::NotFound("5".to_string())));
        assert_eq!(store.get(""), Err(StoreError::NotFound(String::new())));
        assert!(matches!(ItemStore::new().get("1"), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_create_requires_name() {
        let store = ItemStore::new();

        assert!(matches!(
            store.create(NewItem::named("")),
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            store.create(NewItem::with_id("x", "")),
            Err(StoreError::Validation(_))
        ));
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_create_generates_uuid() {
        let store = ItemStore::new();

        let a = store.create(NewItem::named("A")).unwrap();
        let b = store.create(NewItem::named("B")).unwrap();

        let parsed = Uuid::parse_str(&a.id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_ne!(a.id, b.id);
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_create_empty_id_generates() {
        let store = ItemStore::new();
        let item = store.create(NewItem::with_id("", "A")).unwrap();
        assert!(Uuid::parse_str(&item.id).is_ok());
    }

    #[test]
    fn test_create_duplicate_id_conflicts() {
        let store = seeded();

        let result = store.create(NewItem::with_id("2", "Other"));
        assert_eq!(result, Err(StoreError::Conflict("2".to_string())));

        // Original item untouched
        assert_eq!(store.get("2").unwrap().name, "Item 2");
        assert_eq!(store.len().unwrap(), 3);
    }

    #[test]
    fn test_create_sets_timestamp() {
        let store = ItemStore::new();
        let before = Utc::now();
        let item = store.create(NewItem::named("A")).unwrap();
        let after = Utc::now();

        assert!(item.timestamp >= before && item.timestamp <= after);
    }

    #[test]
    fn test_list_is_insertion_ordered_snapshot() {
        let store = seeded();

        let mut snapshot = store.list().unwrap();
        let ids: Vec<_> = snapshot.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);

        snapshot.reverse();
        snapshot.clear();
        assert_eq!(store.len().unwrap(), 3);
    }

    #[test]
    fn test_delete_then_get() {
        let store = seeded();

        let removed = store.delete("2").unwrap();
        assert_eq!(removed.name, "Item 2");
        assert!(matches!(store.get("2"), Err(StoreError::NotFound(_))));
        assert!(matches!(store.delete("2"), Err(StoreError::NotFound(_))));

        let ids: Vec<_> = store.list().unwrap().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_deleted_id_can_be_reused() {
        let store = seeded();
        store.delete("1").unwrap();
        assert!(store.create(NewItem::with_id("1", "Again")).is_ok());
    }

    #[test]
    fn test_concurrent_creates_keep_ids_unique() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(ItemStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    // Every thread races for the same explicit id
                    let shared = store.create(NewItem::with_id("shared", "S")).is_ok();
                    for _ in 0..25 {
                        store.create(NewItem::named("N")).unwrap();
                    }
                    shared
                })
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();
        assert_eq!(winners, 1);

        let mut ids: Vec<_> = store.list().unwrap().into_iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), 8 * 25 + 1);
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8 * 25 + 1);
    }
}
