//! Exclusion configuration.
//!
//! Two id sets control extraction:
//!
//! - **excluded templates**: items (and their whole subtrees) skipped by
//!   traversal
//! - **excluded base templates**: ids dropped from every template's base
//!   template list; always contains the standard fields and folder
//!   templates
//!
//! Raw configuration is parsed once into [`Exclusions`], which is never
//! mutated afterwards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use stencil_types::{ItemId, BUILTIN_EXCLUDED_BASE_TEMPLATES};

use crate::error::{ExtractError, ExtractResult};

/// Exclusion lists as written in configuration files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExclusionConfig {
    /// Templates skipped together with everything beneath them.
    pub excluded_templates: Vec<String>,
    /// Base templates removed from `base_template_ids`.
    pub excluded_base_templates: Vec<String>,
}

impl ExclusionConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an excluded template entry.
    pub fn with_excluded_template(mut self, id: impl Into<String>) -> Self {
        self.excluded_templates.push(id.into());
        self
    }

    /// Add an excluded base template entry.
    pub fn with_excluded_base_template(mut self, id: impl Into<String>) -> Self {
        self.excluded_base_templates.push(id.into());
        self
    }
}

/// Parsed, immutable exclusion sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusions {
    templates: HashSet<ItemId>,
    base_templates: HashSet<ItemId>,
}

impl Default for Exclusions {
    fn default() -> Self {
        Self {
            templates: HashSet::new(),
            base_templates: BUILTIN_EXCLUDED_BASE_TEMPLATES.into_iter().collect(),
        }
    }
}

impl Exclusions {
    /// Create exclusions holding only the built-in base templates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration.
    ///
    /// Fails on the first entry that is not a valid identifier; the error
    /// names the list, the entry index and the offending value.
    pub fn from_config(config: &ExclusionConfig) -> ExtractResult<Self> {
        let mut exclusions = Self::default();

        for (index, raw) in config.excluded_base_templates.iter().enumerate() {
            let id = parse_entry("excluded_base_templates", index, raw)?;
            exclusions.base_templates.insert(id);
        }

        for (index, raw) in config.excluded_templates.iter().enumerate() {
            let id = parse_entry("excluded_templates", index, raw)?;
            exclusions.templates.insert(id);
        }

        Ok(exclusions)
    }

    /// Exclude a template and its subtree.
    pub fn with_excluded_template(mut self, id: ItemId) -> Self {
        self.templates.insert(id);
        self
    }

    /// Exclude a base template id.
    pub fn with_excluded_base_template(mut self, id: ItemId) -> Self {
        self.base_templates.insert(id);
        self
    }

    /// Returns true if traversal must skip this item.
    pub fn is_template_excluded(&self, id: &ItemId) -> bool {
        self.templates.contains(id)
    }

    /// Returns true if this id is dropped from base template lists.
    pub fn is_base_template_excluded(&self, id: &ItemId) -> bool {
        self.base_templates.contains(id)
    }

    /// Excluded template ids, sorted.
    pub fn excluded_templates(&self) -> Vec<ItemId> {
        sorted(&self.templates)
    }

    /// Excluded base template ids, sorted.
    pub fn excluded_base_templates(&self) -> Vec<ItemId> {
        sorted(&self.base_templates)
    }
}

impl TryFrom<&ExclusionConfig> for Exclusions {
    type Error = ExtractError;

    fn try_from(config: &ExclusionConfig) -> ExtractResult<Self> {
        Self::from_config(config)
    }
}

fn parse_entry(list: &str, index: usize, raw: &str) -> ExtractResult<ItemId> {
    ItemId::parse(raw).map_err(|_| {
        ExtractError::config(format!(
            "'{}' is not a valid identifier in {}[{}]",
            raw, list, index
        ))
    })
}

fn sorted(ids: &HashSet<ItemId>) -> Vec<ItemId> {
    let mut ids: Vec<ItemId> = ids.iter().copied().collect();
    ids.sort();
    ids
}
