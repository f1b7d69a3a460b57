//! Integration tests for loading serialized trees
//!
//! Writes small YAML item trees to a temp directory and queries them
//! through the `ContentStore` interface.

use std::fs;
use std::path::Path;

use stencil_store::{yaml, ContentStore, FieldSource, StoreError};
use stencil_types::{ItemId, FOLDER_TEMPLATE_ID, TEMPLATE_ID};
use tempfile::TempDir;

const ROOT_ID: &str = "{11111111-0000-0000-0000-000000000001}";
const PAGE_ID: &str = "{11111111-0000-0000-0000-000000000002}";
const NEWS_ID: &str = "{11111111-0000-0000-0000-000000000003}";

/// Helper: write one serialized item
fn write_item(dir: &Path, file: &str, id: &str, parent: Option<&str>, template: ItemId, path: &str) {
    let mut yaml = format!("---\nID: \"{}\"\n", id);
    if let Some(parent) = parent {
        yaml.push_str(&format!("Parent: \"{}\"\n", parent));
    }
    yaml.push_str(&format!(
        "Template: \"{}\"\nPath: {}\nDB: master\n",
        template, path
    ));
    fs::write(dir.join(file), yaml).unwrap();
}

fn id(raw: &str) -> ItemId {
    raw.parse().unwrap()
}

/// Helper: a folder with two template children spread over nested dirs
fn sample_tree() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("Project");
    fs::create_dir_all(&nested).unwrap();

    write_item(
        temp_dir.path(),
        "Project.yml",
        ROOT_ID,
        None,
        FOLDER_TEMPLATE_ID,
        "/sitecore/templates/Project",
    );
    write_item(
        &nested,
        "News.yml",
        NEWS_ID,
        Some(ROOT_ID),
        TEMPLATE_ID,
        "/sitecore/templates/Project/News",
    );
    write_item(
        &nested,
        "Page.yaml",
        PAGE_ID,
        Some(ROOT_ID),
        TEMPLATE_ID,
        "/sitecore/templates/Project/Page",
    );
    temp_dir
}

#[test]
fn test_children_follow_file_order() {
    let dir = sample_tree();
    let store = yaml::load_dir(dir.path()).unwrap();
    assert_eq!(store.len(), 3);

    let root = store.get_by_id(id(ROOT_ID), "master").unwrap().unwrap();
    let children: Vec<String> = store
        .get_children(&root)
        .unwrap()
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(children, vec!["News", "Page"]);
}

#[test]
fn test_path_lookup_ignores_case_and_trailing_slash() {
    let dir = sample_tree();
    let store = yaml::load_dir(dir.path()).unwrap();

    let found = store
        .get_by_path("/SITECORE/templates/project/", "Master")
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, id(ROOT_ID));
}

#[test]
fn test_items_without_fields_have_empty_layers() {
    let dir = sample_tree();
    let store = yaml::load_dir(dir.path()).unwrap();

    let page = store.get_by_id(id(PAGE_ID), "master").unwrap().unwrap();
    assert!(page.shared_fields().is_empty());
    assert_eq!(page.flat_unversioned_fields().count(), 0);
    assert_eq!(page.flat_versioned_fields().count(), 0);
    assert!(page.is_instance_of(TEMPLATE_ID));
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let dir = sample_tree();
    write_item(
        dir.path(),
        "Copy.yml",
        PAGE_ID,
        Some(ROOT_ID),
        TEMPLATE_ID,
        "/sitecore/templates/Project/Copy",
    );

    let err = yaml::load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateId { .. }));
}

#[test]
fn test_self_parented_item_is_rejected() {
    let dir = sample_tree();
    write_item(
        dir.path(),
        "Loop.yml",
        "{11111111-0000-0000-0000-000000000004}",
        Some("{11111111-0000-0000-0000-000000000004}"),
        FOLDER_TEMPLATE_ID,
        "/sitecore/templates/Project/Loop",
    );

    let err = yaml::load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, StoreError::SelfParent { .. }));
}

#[test]
fn test_malformed_file_names_its_path() {
    let dir = sample_tree();
    fs::write(dir.path().join("Broken.yml"), "ID: [not, an, id]\n").unwrap();

    let err = yaml::load_dir(dir.path()).unwrap_err();
    match err {
        StoreError::Parse { path, .. } => assert!(path.ends_with("Broken.yml")),
        other => panic!("unexpected error: {other}"),
    }
}
