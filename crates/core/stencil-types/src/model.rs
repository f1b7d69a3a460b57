//! Extracted template descriptors.
//!
//! These are immutable snapshots produced fresh by each extraction call.
//! Inheritance is not flattened: a template lists only its direct base
//! templates and the fields it defines itself.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IdParseError;
use crate::ItemId;

/// One template discovered in the content store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TemplateInfo {
    /// Item identifier of the template.
    pub id: ItemId,
    /// Display name at extraction time.
    pub name: String,
    /// Store path at extraction time.
    pub path: String,
    /// Direct base templates in stored order, excluded ids removed.
    pub base_template_ids: Vec<ItemId>,
    /// Fields defined directly on this template, in section then field order.
    pub own_fields: Vec<TemplateFieldInfo>,
    /// Editor help text; empty when absent.
    pub help_text: String,
}

impl TemplateInfo {
    /// Find an own field by item name.
    pub fn field(&self, name: &str) -> Option<&TemplateFieldInfo> {
        self.own_fields.iter().find(|f| f.name == name)
    }

    /// Distinct section names in the order they first appear.
    pub fn sections(&self) -> Vec<&str> {
        let mut sections: Vec<&str> = Vec::new();
        for field in &self.own_fields {
            if !sections.contains(&field.section.as_str()) {
                sections.push(&field.section);
            }
        }
        sections
    }

    /// Fields belonging to the named section.
    pub fn fields_in_section<'a>(
        &'a self,
        section: &'a str,
    ) -> impl Iterator<Item = &'a TemplateFieldInfo> + 'a {
        self.own_fields.iter().filter(move |f| f.section == section)
    }
}

/// One field defined directly under a template section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TemplateFieldInfo {
    /// Item identifier of the field definition.
    pub id: ItemId,
    /// Item name of the field definition.
    pub name: String,
    /// Store path of the field definition.
    pub path: String,
    /// Name of the enclosing section item.
    pub section: String,
    /// Field title, falling back to the display name.
    pub display_name: String,
    /// Editor help text.
    pub help_text: String,
    /// Data source expression.
    pub source: String,
    /// Field type name.
    #[serde(rename = "type")]
    pub field_type: String,
    /// Sort order among sibling fields.
    pub sort_order: i32,
    /// Every stored value on the field item, keyed by field id.
    pub all_fields: BTreeMap<ItemId, String>,
}

/// A subtree to scan: a path inside a named database.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreeRoot {
    /// Database (container) the path lives in.
    pub database: String,
    /// Store path of the subtree root.
    pub path: String,
}

impl TreeRoot {
    /// Create a new root descriptor.
    pub fn new(database: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            path: path.into(),
        }
    }

    /// Parse a root written as `database:/path`.
    pub fn parse(input: &str) -> Result<Self, IdParseError> {
        match input.trim().split_once(':') {
            Some((database, path)) if !database.is_empty() && !path.is_empty() => {
                Ok(Self::new(database, path))
            }
            _ => Err(IdParseError::InvalidRoot(input.to_string())),
        }
    }
}

impl fmt::Display for TreeRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.database, self.path)
    }
}

impl FromStr for TreeRoot {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
