//! In-memory content store.
//!
//! Items are inserted once and then only read. Each database keeps its
//! items in insertion order, which is also the order children are returned
//! in.

use std::collections::HashMap;

use stencil_types::ItemId;

use crate::error::{StoreError, StoreResult};
use crate::traits::ContentStore;
use crate::types::Item;

/// Items of one database plus lookup indexes.
#[derive(Debug, Default)]
struct Database {
    items: Vec<Item>,
    by_id: HashMap<ItemId, usize>,
    by_path: HashMap<String, Vec<usize>>,
    children: HashMap<ItemId, Vec<usize>>,
}

/// In-memory content store.
///
/// Database names and paths are matched case-insensitively, as content
/// store paths are. Two items may share a path; both are returned by
/// [`ContentStore::get_by_path`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    databases: HashMap<String, Database>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item.
    ///
    /// Returns an error if an item with the same id already exists in the
    /// item's database, or if the item is its own parent.
    pub fn insert(&mut self, item: Item) -> StoreResult<()> {
        if !item.parent_id.is_nil() && item.parent_id == item.id {
            return Err(StoreError::SelfParent {
                id: item.id,
                database: item.database,
            });
        }

        let db = self.databases.entry(normalize(&item.database)).or_default();

        if db.by_id.contains_key(&item.id) {
            return Err(StoreError::DuplicateId {
                id: item.id,
                database: item.database,
            });
        }

        let index = db.items.len();
        db.by_id.insert(item.id, index);
        db.by_path.entry(normalize(&item.path)).or_default().push(index);
        if !item.parent_id.is_nil() {
            db.children.entry(item.parent_id).or_default().push(index);
        }
        db.items.push(item);

        Ok(())
    }

    /// Add several items in order.
    pub fn extend(&mut self, items: impl IntoIterator<Item = Item>) -> StoreResult<()> {
        for item in items {
            self.insert(item)?;
        }
        Ok(())
    }

    /// Build a store from items.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> StoreResult<Self> {
        let mut store = Self::new();
        store.extend(items)?;
        Ok(store)
    }

    /// Total number of items across all databases.
    pub fn len(&self) -> usize {
        self.databases.values().map(|db| db.items.len()).sum()
    }

    /// Returns true if the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of the databases that hold items, sorted.
    pub fn databases(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .databases
            .values()
            .filter_map(|db| db.items.first().map(|item| item.database.clone()))
            .collect();
        names.sort();
        names
    }

    fn database(&self, name: &str) -> Option<&Database> {
        self.databases.get(&normalize(name))
    }
}

impl ContentStore for MemoryStore {
    fn get_by_path(&self, path: &str, database: &str) -> StoreResult<Vec<Item>> {
        let Some(db) = self.database(database) else {
            return Ok(Vec::new());
        };

        Ok(db
            .by_path
            .get(&normalize(path))
            .map(|indexes| indexes.iter().map(|&i| db.items[i].clone()).collect())
            .unwrap_or_default())
    }

    fn get_children(&self, item: &Item) -> StoreResult<Vec<Item>> {
        let Some(db) = self.database(&item.database) else {
            return Ok(Vec::new());
        };

        Ok(db
            .children
            .get(&item.id)
            .map(|indexes| indexes.iter().map(|&i| db.items[i].clone()).collect())
            .unwrap_or_default())
    }

    fn get_by_id(&self, id: ItemId, database: &str) -> StoreResult<Option<Item>> {
        Ok(self
            .database(database)
            .and_then(|db| db.by_id.get(&id).map(|&i| db.items[i].clone())))
    }
}

fn normalize(key: &str) -> String {
    key.trim_end_matches('/').to_lowercase()
}
