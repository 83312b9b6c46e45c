//! The in-memory list store.
//!
//! # Design
//! Items live in a `Vec` so iteration order is insertion order; lookups are a
//! linear scan on `id`. The id counter only ever moves forward, so an id freed
//! by a delete is never handed out again. The store takes `&mut self` for
//! mutations and has no interior locking: a multi-threaded host wraps it in a
//! single lock held across each call.

use tracing::{debug, trace};

use crate::error::{StoreError, StoreResult};
use crate::generate::{BulkDates, LoremProvider, TextProvider, TASK_SENTENCES};
use crate::types::{ListItem, ListItemInput, ListItemPatch};

/// Ordered collection of list items plus the id allocator.
#[derive(Debug, Clone)]
pub struct ListStore {
    items: Vec<ListItem>,
    last_id: u64,
    bulk_dates: BulkDates,
}

impl ListStore {
    /// Empty store. The shared bulk-generation dates are drawn here, once.
    pub fn new() -> Self {
        Self::with_bulk_dates(BulkDates::generate())
    }

    /// Empty store that stamps `dates` on every bulk-generated item.
    pub fn with_bulk_dates(dates: BulkDates) -> Self {
        Self {
            items: Vec::new(),
            last_id: 0,
            bulk_dates: dates,
        }
    }

    pub fn bulk_dates(&self) -> &BulkDates {
        &self.bulk_dates
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a new item with the next id and returns it.
    pub fn create(&mut self, input: ListItemInput) -> ListItem {
        self.last_id += 1;
        let item = ListItem::from_input(self.last_id, input);
        self.items.push(item.clone());
        debug!(id = item.id, "created list item");
        item
    }

    /// Creates `count` placeholder items using lorem task text.
    pub fn create_many(&mut self, count: usize) -> Vec<ListItem> {
        self.create_many_with(count, &mut LoremProvider::new())
    }

    /// Creates `count` placeholder items with task text from `text`.
    pub fn create_many_with<T: TextProvider + ?Sized>(
        &mut self,
        count: usize,
        text: &mut T,
    ) -> Vec<ListItem> {
        let created: Vec<ListItem> = (0..count)
            .map(|_| {
                let input = ListItemInput {
                    task: text.sentences(TASK_SENTENCES),
                    created_on: self.bulk_dates.created_on.clone(),
                    due_on: self.bulk_dates.due_on.clone(),
                };
                self.create(input)
            })
            .collect();
        debug!(count, "generated placeholder list items");
        created
    }

    /// All items in insertion order.
    pub fn get_all(&self) -> Vec<ListItem> {
        self.items.clone()
    }

    pub fn get_by_id(&self, id: u64) -> StoreResult<ListItem> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| miss(id))
    }

    /// Merges the fields present in `patch` onto the stored item and returns it.
    pub fn update_by_id(&mut self, id: u64, patch: ListItemPatch) -> StoreResult<ListItem> {
        let idx = self.position_of(id)?;
        let item = &mut self.items[idx];
        item.apply(patch);
        debug!(id, "updated list item");
        Ok(item.clone())
    }

    /// Removes the item and returns it as it was just before removal.
    pub fn delete_by_id(&mut self, id: u64) -> StoreResult<ListItem> {
        let idx = self.position_of(id)?;
        let removed = self.items.remove(idx);
        debug!(id, "deleted list item");
        Ok(removed)
    }

    fn position_of(&self, id: u64) -> StoreResult<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| miss(id))
    }
}

impl Default for ListStore {
    fn default() -> Self {
        Self::new()
    }
}

fn miss(id: u64) -> StoreError {
    trace!(id, "list item lookup missed");
    StoreError::NotFound { id }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl TextProvider for Fixed {
        fn sentences(&mut self, _count: usize) -> String {
            self.0.to_string()
        }
    }

    fn input(task: &str) -> ListItemInput {
        ListItemInput {
            task: task.to_string(),
            created_on: "1/1/2024".to_string(),
            due_on: "1/2/2024".to_string(),
        }
    }

    fn dates() -> BulkDates {
        BulkDates {
            created_on: "3/4/2025".to_string(),
            due_on: "13/32/2030".to_string(),
        }
    }

    #[test]
    fn first_id_is_one() {
        let mut store = ListStore::new();
        assert_eq!(store.create(input("a")).id, 1);
        assert_eq!(store.create(input("b")).id, 2);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = ListStore::new();
        store.create(input("a"));
        let b = store.create(input("b"));
        store.delete_by_id(b.id).unwrap();
        assert_eq!(store.create(input("c")).id, 3);
    }

    #[test]
    fn get_by_id_missing_is_not_found() {
        let store = ListStore::new();
        assert_eq!(store.get_by_id(1), Err(StoreError::NotFound { id: 1 }));
    }

    #[test]
    fn get_all_is_a_copy() {
        let mut store = ListStore::new();
        store.create(input("a"));
        let mut snapshot = store.get_all();
        snapshot[0].task = "tampered".to_string();
        snapshot.clear();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_by_id(1).unwrap().task, "a");
    }

    #[test]
    fn update_changes_only_task() {
        let mut store = ListStore::new();
        let before = store.create(input("a"));
        let patch = ListItemPatch {
            task: Some("x".to_string()),
            ..Default::default()
        };
        let after = store.update_by_id(before.id, patch).unwrap();
        assert_eq!(after.id, before.id);
        assert_eq!(after.task, "x");
        assert_eq!(after.created_on, before.created_on);
        assert_eq!(after.due_on, before.due_on);
        assert_eq!(store.get_by_id(before.id).unwrap(), after);
    }

    #[test]
    fn update_missing_is_not_found() {
        let mut store = ListStore::new();
        let err = store.update_by_id(5, ListItemPatch::default()).unwrap_err();
        assert_eq!(err, StoreError::NotFound { id: 5 });
    }

    #[test]
    fn empty_patch_leaves_item_unchanged() {
        let mut store = ListStore::new();
        let before = store.create(input("a"));
        let after = store.update_by_id(before.id, ListItemPatch::default()).unwrap();
        assert_eq!(after, before);
    }

    #[test]
    fn delete_preserves_order_of_remaining() {
        let mut store = ListStore::new();
        for task in ["a", "b", "c", "d"] {
            store.create(input(task));
        }
        let removed = store.delete_by_id(2).unwrap();
        assert_eq!(removed.task, "b");
        let tasks: Vec<String> = store.get_all().into_iter().map(|i| i.task).collect();
        assert_eq!(tasks, ["a", "c", "d"]);
    }

    #[test]
    fn delete_missing_leaves_collection_unchanged() {
        let mut store = ListStore::new();
        store.create(input("a"));
        store.create(input("b"));
        let before = store.get_all();
        assert_eq!(store.delete_by_id(9), Err(StoreError::NotFound { id: 9 }));
        assert_eq!(store.get_all(), before);
    }

    #[test]
    fn create_many_shares_store_dates() {
        let mut store = ListStore::with_bulk_dates(dates());
        let created = store.create_many_with(3, &mut Fixed("placeholder"));
        assert_eq!(created.len(), 3);
        for item in &created {
            assert_eq!(item.task, "placeholder");
            assert_eq!(item.created_on, "3/4/2025");
            assert_eq!(item.due_on, "13/32/2030");
        }
        let ids: Vec<u64> = created.iter().map(|i| i.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn create_many_dates_stable_across_calls() {
        let mut store = ListStore::new();
        let first = store.create_many(2);
        let second = store.create_many(2);
        assert_eq!(first[0].created_on, second[1].created_on);
        assert_eq!(first[0].due_on, second[1].due_on);
        assert_eq!(&first[0].due_on, &store.bulk_dates().due_on);
    }

    #[test]
    fn create_many_zero_creates_nothing() {
        let mut store = ListStore::new();
        assert!(store.create_many(0).is_empty());
        assert!(store.is_empty());
        assert_eq!(store.create(input("a")).id, 1);
    }
}
