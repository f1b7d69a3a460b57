//! Item snapshots and their field layers.
//!
//! An item stores field values in three layers:
//!
//! - **shared**: one value regardless of language or version
//! - **unversioned**: one group per language
//! - **versioned**: one group per (language, version)
//!
//! The layers are plain ordered sequences. Resolution rules live with the
//! consumer, not here.

use serde::{Deserialize, Serialize};
use stencil_types::ItemId;

use crate::traits::FieldSource;

/// One stored field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValue {
    /// Identifier of the field definition.
    pub field_id: ItemId,
    /// Raw stored value.
    pub value: String,
    /// Optional human label for the field (serialized items carry one).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl FieldValue {
    /// Create a new field value.
    pub fn new(field_id: ItemId, value: impl Into<String>) -> Self {
        Self {
            field_id,
            value: value.into(),
            hint: None,
        }
    }

    /// Attach a human label.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Unversioned values for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageFields {
    /// Language (variant) name.
    pub language: String,
    /// Values in stored order.
    pub fields: Vec<FieldValue>,
}

/// Versioned values for one (language, version) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionFields {
    /// Language (variant) name.
    pub language: String,
    /// Version number.
    pub version: u32,
    /// Values in stored order.
    pub fields: Vec<FieldValue>,
}

/// Immutable snapshot of one content store item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item identifier.
    pub id: ItemId,
    /// Parent identifier; nil for a database root.
    pub parent_id: ItemId,
    /// Type reference: the template this item is an instance of.
    pub template_id: ItemId,
    /// Item name.
    pub name: String,
    /// Full store path.
    pub path: String,
    /// Database the item lives in.
    pub database: String,
    /// Shared layer.
    pub shared: Vec<FieldValue>,
    /// Unversioned layer.
    pub unversioned: Vec<LanguageFields>,
    /// Versioned layer.
    pub versions: Vec<VersionFields>,
}

impl Item {
    /// Create an item with no field values.
    ///
    /// The name is taken from the last segment of `path`.
    pub fn new(
        id: ItemId,
        template_id: ItemId,
        path: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        let path = path.into();
        let name = name_from_path(&path).to_string();
        Self {
            id,
            parent_id: ItemId::NIL,
            template_id,
            name,
            path,
            database: database.into(),
            shared: Vec::new(),
            unversioned: Vec::new(),
            versions: Vec::new(),
        }
    }

    /// Set the parent identifier.
    pub fn with_parent(mut self, parent_id: ItemId) -> Self {
        self.parent_id = parent_id;
        self
    }

    /// Override the item name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Append a shared value.
    pub fn with_shared(mut self, field_id: ItemId, value: impl Into<String>) -> Self {
        self.shared.push(FieldValue::new(field_id, value));
        self
    }

    /// Append an unversioned value for `language`.
    pub fn with_unversioned(
        mut self,
        language: &str,
        field_id: ItemId,
        value: impl Into<String>,
    ) -> Self {
        let value = FieldValue::new(field_id, value);
        match self.unversioned.iter_mut().find(|g| g.language == language) {
            Some(group) => group.fields.push(value),
            None => self.unversioned.push(LanguageFields {
                language: language.to_string(),
                fields: vec![value],
            }),
        }
        self
    }

    /// Append a versioned value for `language` and `version`.
    pub fn with_versioned(
        mut self,
        language: &str,
        version: u32,
        field_id: ItemId,
        value: impl Into<String>,
    ) -> Self {
        let value = FieldValue::new(field_id, value);
        match self
            .versions
            .iter_mut()
            .find(|g| g.language == language && g.version == version)
        {
            Some(group) => group.fields.push(value),
            None => self.versions.push(VersionFields {
                language: language.to_string(),
                version,
                fields: vec![value],
            }),
        }
        self
    }

    /// Returns true if this item is an instance of `template_id`.
    pub fn is_instance_of(&self, template_id: ItemId) -> bool {
        self.template_id == template_id
    }
}

impl FieldSource for Item {
    fn shared_fields(&self) -> &[FieldValue] {
        &self.shared
    }

    fn unversioned_fields(&self) -> &[LanguageFields] {
        &self.unversioned
    }

    fn versioned_fields(&self) -> &[VersionFields] {
        &self.versions
    }
}

/// Last segment of a store path.
pub fn name_from_path(path: &str) -> &str {
    path.trim_end_matches('/').rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u128) -> ItemId {
        ItemId::from_u128(n)
    }

    #[test]
    fn test_name_from_path() {
        assert_eq!(name_from_path("/sitecore/templates/Page"), "Page");
        assert_eq!(name_from_path("/sitecore/templates/"), "templates");
        assert_eq!(name_from_path("Page"), "Page");
    }

    #[test]
    fn test_builder_groups_layers() {
        let item = Item::new(id(1), id(2), "/a/b", "master")
            .with_unversioned("en", id(10), "x")
            .with_unversioned("da", id(10), "y")
            .with_unversioned("en", id(11), "z")
            .with_versioned("en", 1, id(12), "v1")
            .with_versioned("en", 2, id(12), "v2")
            .with_versioned("en", 1, id(13), "w");

        assert_eq!(item.name, "b");
        assert_eq!(item.unversioned.len(), 2);
        assert_eq!(item.unversioned[0].fields.len(), 2);
        assert_eq!(item.versions.len(), 2);
        assert_eq!(item.versions[0].fields.len(), 2);
        assert_eq!(item.versions[1].version, 2);
    }

    #[test]
    fn test_flattening_preserves_order() {
        let item = Item::new(id(1), id(2), "/a", "master")
            .with_unversioned("en", id(10), "first")
            .with_unversioned("da", id(10), "second")
            .with_versioned("en", 1, id(11), "v1")
            .with_versioned("da", 1, id(11), "v1-da");

        let unversioned: Vec<&str> = item
            .flat_unversioned_fields()
            .map(|f| f.value.as_str())
            .collect();
        assert_eq!(unversioned, vec!["first", "second"]);

        let versioned: Vec<&str> = item
            .flat_versioned_fields()
            .map(|f| f.value.as_str())
            .collect();
        assert_eq!(versioned, vec!["v1", "v1-da"]);
    }

    #[test]
    fn test_is_instance_of() {
        let item = Item::new(id(1), id(2), "/a", "master");
        assert!(item.is_instance_of(id(2)));
        assert!(!item.is_instance_of(id(3)));
    }
}
