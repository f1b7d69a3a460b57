//! Template extraction for stencil.
//!
//! This crate walks a hierarchical content store and produces a flat list
//! of [`TemplateInfo`](stencil_types::TemplateInfo) descriptors: each
//! template's identity, its direct base templates, and the fields it
//! defines grouped by section. The output feeds code generation.
//!
//! # Module Organization
//!
//! - [`error`] - Extraction error types
//! - [`config`] - Exclusion lists and their parsed, immutable form
//! - [`fields`] - Layered field resolution and multilist parsing
//! - [`resolver`] - Pluggable field resolver and template predicate
//! - [`extractor`] - Root resolution, traversal and template parsing
//!
//! # Example
//!
//! ```
//! use stencil_extract::{Exclusions, TemplateExtractor};
//! use stencil_store::{Item, MemoryStore};
//! use stencil_types::{ItemId, TreeRoot, FOLDER_TEMPLATE_ID, TEMPLATE_ID};
//!
//! let folder = Item::new(ItemId::from_u128(1), FOLDER_TEMPLATE_ID, "/templates", "master");
//! let page = Item::new(ItemId::from_u128(2), TEMPLATE_ID, "/templates/Page", "master")
//!     .with_parent(folder.id);
//! let store = MemoryStore::from_items(vec![folder, page]).unwrap();
//!
//! let extractor = TemplateExtractor::new(store, Exclusions::default());
//! let templates = extractor
//!     .get_templates(&[TreeRoot::new("master", "/templates")])
//!     .unwrap();
//!
//! assert_eq!(templates.len(), 1);
//! assert_eq!(templates[0].name, "Page");
//! ```
//!
//! # Scope
//!
//! Extraction never writes to the store and does not flatten inheritance:
//! each template lists only its direct base templates and own fields.

pub mod config;
pub mod error;
pub mod extractor;
pub mod fields;
pub mod resolver;

pub use config::{ExclusionConfig, Exclusions};
pub use error::{ExtractError, ExtractResult};
pub use extractor::{TemplateExtractor, TemplateWalk};
pub use resolver::{is_template_item, FieldResolver, LayeredFieldResolver, TemplatePredicate};
