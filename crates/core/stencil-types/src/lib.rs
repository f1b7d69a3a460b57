//! Data structures for stencil.
//!
//! This crate provides the identifier type and the template model shared by
//! every stencil crate. It contains no traversal logic, only type
//! definitions with serialization support.
//!
//! # Module Organization
//!
//! - [`id`] - The [`ItemId`] identifier and its parsing rules
//! - [`constants`] - Well-known type and field identifiers
//! - [`model`] - Extracted template descriptors and root descriptors
//! - [`error`] - Identifier parse errors
//!
//! # Example
//!
//! ```
//! use stencil_types::{constants::TEMPLATE_ID, ItemId};
//!
//! let id: ItemId = "{ab86861a-6030-46c5-b394-e8f99e8b87db}".parse().unwrap();
//! assert_eq!(id, TEMPLATE_ID);
//! assert_eq!(id.to_string(), "{AB86861A-6030-46C5-B394-E8F99E8B87DB}");
//! ```
//!
//! # Type Conventions
//!
//! - Identifiers are `Copy` and print in the braced upper-case form
//! - Model types derive `Serialize`, `Deserialize` with snake_case fields
//! - Maps use `BTreeMap` so serialized output is deterministic

/// Crate version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod constants;
pub mod error;
pub mod id;
pub mod model;

pub use constants::*;
pub use error::IdParseError;
pub use id::ItemId;
pub use model::{TemplateFieldInfo, TemplateInfo, TreeRoot};
