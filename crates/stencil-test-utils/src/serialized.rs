//! Writes items in the serialized YAML layout read by `stencil_store::yaml`.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use stencil_store::{FieldValue, Item};

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SerializedItem<'a> {
    #[serde(rename = "ID")]
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<String>,
    template: String,
    path: &'a str,
    #[serde(rename = "DB")]
    database: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    shared_fields: Vec<SerializedField<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    languages: Vec<SerializedLanguage<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SerializedField<'a> {
    #[serde(rename = "ID")]
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<&'a str>,
    value: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SerializedLanguage<'a> {
    language: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<SerializedField<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    versions: Vec<SerializedVersion<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SerializedVersion<'a> {
    version: u32,
    fields: Vec<SerializedField<'a>>,
}

fn field(value: &FieldValue) -> SerializedField<'_> {
    SerializedField {
        id: value.field_id.to_string(),
        hint: value.hint.as_deref(),
        value: &value.value,
    }
}

fn serialize(item: &Item) -> SerializedItem<'_> {
    let mut languages: Vec<SerializedLanguage<'_>> = Vec::new();

    for group in &item.unversioned {
        languages.push(SerializedLanguage {
            language: &group.language,
            fields: group.fields.iter().map(field).collect(),
            versions: Vec::new(),
        });
    }

    for group in &item.versions {
        let version = SerializedVersion {
            version: group.version,
            fields: group.fields.iter().map(field).collect(),
        };
        match languages.iter_mut().find(|l| l.language == group.language) {
            Some(language) => language.versions.push(version),
            None => languages.push(SerializedLanguage {
                language: &group.language,
                fields: Vec::new(),
                versions: vec![version],
            }),
        }
    }

    SerializedItem {
        id: item.id.to_string(),
        parent: (!item.parent_id.is_nil()).then(|| item.parent_id.to_string()),
        template: item.template_id.to_string(),
        path: &item.path,
        database: &item.database,
        shared_fields: item.shared.iter().map(field).collect(),
        languages,
    }
}

/// Write each item to `<dir>/<zero-padded index>-<name>.yml`.
///
/// The index prefix keeps the loader's sorted file order equal to the
/// order of `items`.
pub fn write_serialized_tree(dir: &Path, items: &[Item]) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    for (index, item) in items.iter().enumerate() {
        let yaml = serde_yaml::to_string(&serialize(item))
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(dir.join(format!("{:04}-{}.yml", index, item.name)), yaml)?;
    }
    Ok(())
}
