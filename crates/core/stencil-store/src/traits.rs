//! Trait definitions for storage components.
//!
//! Extraction only ever reads from a store. Implementations may vary
//! (in-memory, serialized files, a live database) but must satisfy these
//! interfaces.

use std::sync::Arc;

use stencil_types::ItemId;

use crate::error::StoreResult;
use crate::types::{FieldValue, Item, LanguageFields, VersionFields};

// =============================================================================
// Field Layers
// =============================================================================

/// Access to the three field layers of an item.
pub trait FieldSource {
    /// Values shared across every language and version.
    fn shared_fields(&self) -> &[FieldValue];

    /// Unversioned values, grouped by language.
    fn unversioned_fields(&self) -> &[LanguageFields];

    /// Versioned values, grouped by language and version.
    fn versioned_fields(&self) -> &[VersionFields];

    /// Unversioned values of every language, in stored order.
    fn flat_unversioned_fields(&self) -> impl Iterator<Item = &FieldValue> {
        self.unversioned_fields()
            .iter()
            .flat_map(|group| group.fields.iter())
    }

    /// Versioned values of every version, in stored order.
    fn flat_versioned_fields(&self) -> impl Iterator<Item = &FieldValue> {
        self.versioned_fields()
            .iter()
            .flat_map(|group| group.fields.iter())
    }
}

// =============================================================================
// Content Store
// =============================================================================

/// Read access to a hierarchical content store.
///
/// Stores are shared across threads during parallel root scans, so
/// implementations must be `Send + Sync`.
pub trait ContentStore: Send + Sync {
    /// Find items by path within a database.
    ///
    /// A path may be ambiguous: zero, one, or several items can match.
    fn get_by_path(&self, path: &str, database: &str) -> StoreResult<Vec<Item>>;

    /// Get the direct children of an item, in store order.
    fn get_children(&self, item: &Item) -> StoreResult<Vec<Item>>;

    /// Get an item by id.
    ///
    /// Returns `None` if the item doesn't exist.
    fn get_by_id(&self, id: ItemId, database: &str) -> StoreResult<Option<Item>>;
}

impl<T: ContentStore + ?Sized> ContentStore for &T {
    fn get_by_path(&self, path: &str, database: &str) -> StoreResult<Vec<Item>> {
        (**self).get_by_path(path, database)
    }

    fn get_children(&self, item: &Item) -> StoreResult<Vec<Item>> {
        (**self).get_children(item)
    }

    fn get_by_id(&self, id: ItemId, database: &str) -> StoreResult<Option<Item>> {
        (**self).get_by_id(id, database)
    }
}

impl<T: ContentStore + ?Sized> ContentStore for Arc<T> {
    fn get_by_path(&self, path: &str, database: &str) -> StoreResult<Vec<Item>> {
        (**self).get_by_path(path, database)
    }

    fn get_children(&self, item: &Item) -> StoreResult<Vec<Item>> {
        (**self).get_children(item)
    }

    fn get_by_id(&self, id: ItemId, database: &str) -> StoreResult<Option<Item>> {
        (**self).get_by_id(id, database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_store_is_object_safe() {
        fn _takes_store(_: &dyn ContentStore) {}
    }
}
