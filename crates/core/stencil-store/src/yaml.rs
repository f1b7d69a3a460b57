//! Serialized item loading.
//!
//! Content trees are commonly serialized as one YAML document per item:
//!
//! ```yaml
//! ---
//! ID: "ab86861a-6030-46c5-b394-e8f99e8b87db"
//! Parent: "3c1715fe-6a13-4fcf-845f-de308ba9741d"
//! Template: "ab86861a-6030-46c5-b394-e8f99e8b87db"
//! Path: /sitecore/templates/Project/Page
//! DB: master
//! SharedFields:
//! - ID: "12c33f3f-86c5-43a5-aeb4-5598cec45116"
//!   Hint: __Base template
//!   Value: "{1930BBEB-7805-471A-A3BE-4858AC7CF696}"
//! Languages:
//! - Language: en
//!   Fields:
//!   - ID: "b5e02ad9-d56f-4c41-a065-a133db87bdeb"
//!     Value: Page
//!   Versions:
//!   - Version: 1
//!     Fields:
//!     - ID: "577f1689-7de4-4ad2-a15f-7fdc1759285f"
//!       Value: A content page
//! ```
//!
//! This module reads that layout into [`Item`] snapshots and loads whole
//! directories into a [`MemoryStore`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use stencil_types::ItemId;
use walkdir::WalkDir;

use crate::error::{StoreError, StoreResult};
use crate::memory::MemoryStore;
use crate::types::{name_from_path, FieldValue, Item, LanguageFields, VersionFields};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SerializedItem {
    #[serde(rename = "ID")]
    id: ItemId,
    #[serde(default)]
    parent: Option<ItemId>,
    template: ItemId,
    path: String,
    #[serde(rename = "DB")]
    database: String,
    #[serde(default)]
    shared_fields: Vec<SerializedField>,
    #[serde(default)]
    languages: Vec<SerializedLanguage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SerializedField {
    #[serde(rename = "ID")]
    id: ItemId,
    #[serde(default)]
    hint: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    value: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SerializedLanguage {
    language: String,
    #[serde(default)]
    fields: Vec<SerializedField>,
    #[serde(default)]
    versions: Vec<SerializedVersion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SerializedVersion {
    version: u32,
    #[serde(default)]
    fields: Vec<SerializedField>,
}

/// Field values are written unquoted when they look like numbers or
/// booleans. Read them as text so the stored form is kept exactly.
fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl From<SerializedField> for FieldValue {
    fn from(field: SerializedField) -> Self {
        FieldValue {
            field_id: field.id,
            value: field.value,
            hint: field.hint,
        }
    }
}

impl From<SerializedItem> for Item {
    fn from(serialized: SerializedItem) -> Self {
        let mut unversioned = Vec::new();
        let mut versions = Vec::new();

        for language in serialized.languages {
            if !language.fields.is_empty() {
                unversioned.push(LanguageFields {
                    language: language.language.clone(),
                    fields: language.fields.into_iter().map(Into::into).collect(),
                });
            }
            for version in language.versions {
                versions.push(VersionFields {
                    language: language.language.clone(),
                    version: version.version,
                    fields: version.fields.into_iter().map(Into::into).collect(),
                });
            }
        }

        Item {
            id: serialized.id,
            parent_id: serialized.parent.unwrap_or(ItemId::NIL),
            template_id: serialized.template,
            name: name_from_path(&serialized.path).to_string(),
            path: serialized.path,
            database: serialized.database,
            shared: serialized
                .shared_fields
                .into_iter()
                .map(Into::into)
                .collect(),
            unversioned,
            versions,
        }
    }
}

/// Parse one serialized item.
///
/// `origin` is only used to label errors.
pub fn parse_item(source: &str, origin: &Path) -> StoreResult<Item> {
    let serialized: SerializedItem = serde_yaml::from_str(source)
        .map_err(|e| StoreError::parse(origin, e.to_string()))?;
    Ok(serialized.into())
}

/// Read and parse one serialized item file.
pub fn load_item(path: &Path) -> StoreResult<Item> {
    let source = fs::read_to_string(path)?;
    parse_item(&source, path)
}

/// Load every `.yml`/`.yaml` file under `dir` into a new store.
///
/// Files are visited in sorted path order, so sibling order is stable
/// between runs.
pub fn load_dir(dir: &Path) -> StoreResult<MemoryStore> {
    if !dir.is_dir() {
        return Err(StoreError::invalid_data(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let mut store = MemoryStore::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| StoreError::parse(dir, e.to_string()))?;
        if entry.file_type().is_file() && is_serialized_item(entry.path()) {
            store.insert(load_item(entry.path())?)?;
        }
    }

    tracing::debug!(
        dir = %dir.display(),
        items = store.len(),
        "Loaded serialized items"
    );
    Ok(store)
}

fn is_serialized_item(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yml") | Some("yaml")
    )
}
