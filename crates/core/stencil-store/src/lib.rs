//! Read-only content store layer for stencil.
//!
//! This crate provides the view of a hierarchical content store that
//! template extraction reads from:
//!
//! - **Items** ([`Item`]): immutable snapshots with an id, a type reference,
//!   a path, and field values in three layers (shared, unversioned,
//!   versioned)
//! - **Traits** ([`ContentStore`], [`FieldSource`]): lookup by path,
//!   child enumeration, and layer access
//! - **In-memory store** ([`MemoryStore`]): indexes items by id, path and
//!   parent
//! - **Serialized items** ([`yaml`]): loads a directory of YAML item files
//!   into a [`MemoryStore`]
//!
//! # Example
//!
//! ```
//! use stencil_store::{ContentStore, Item, MemoryStore};
//! use stencil_types::{ItemId, FOLDER_TEMPLATE_ID};
//!
//! let root = Item::new(ItemId::from_u128(1), FOLDER_TEMPLATE_ID, "/templates", "master");
//! let child = Item::new(ItemId::from_u128(2), FOLDER_TEMPLATE_ID, "/templates/Project", "master")
//!     .with_parent(root.id);
//!
//! let store = MemoryStore::from_items(vec![root, child]).unwrap();
//! let found = store.get_by_path("/templates", "master").unwrap();
//! assert_eq!(store.get_children(&found[0]).unwrap()[0].name, "Project");
//! ```
//!
//! # Trait-Based Design
//!
//! Extraction is written against [`ContentStore`], so alternative
//! backends only need to answer path, child and id lookups. Nothing in
//! this crate writes back to a store.

pub mod error;
pub mod memory;
pub mod traits;
pub mod types;
pub mod yaml;

// Re-export error types
pub use error::{StoreError, StoreResult};

// Re-export traits
pub use traits::{ContentStore, FieldSource};

// Re-export types
pub use types::{FieldValue, Item, LanguageFields, VersionFields};

// Re-export implementations
pub use memory::MemoryStore;
