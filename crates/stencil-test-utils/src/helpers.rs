//! Helpers for building content trees in tests.
//!
//! [`TreeBuilder`] hands out sequential ids and derives each item's path
//! from its parent, so fixtures read like the tree they describe.

use std::collections::HashMap;

use stencil_store::{Item, MemoryStore};
use stencil_types::{
    ItemId, BASE_TEMPLATES_FIELD_ID, FOLDER_TEMPLATE_ID, TEMPLATE_FIELD_ID, TEMPLATE_ID,
    TEMPLATE_SECTION_ID,
};

/// High bits of every generated id, keeping them clear of well-known ids.
const ID_PREFIX: u128 = 0x7E57_0000_0000_0000_0000_0000_0000_0000;

/// Deterministic fixture id.
pub fn test_id(n: u128) -> ItemId {
    ItemId::from_u128(ID_PREFIX | n)
}

/// Builds a tree of items for one database.
#[derive(Debug)]
pub struct TreeBuilder {
    database: String,
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
    next: u128,
}

impl TreeBuilder {
    /// Start an empty tree in `database`.
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            items: Vec::new(),
            index: HashMap::new(),
            next: 1,
        }
    }

    /// Add a parentless folder at an absolute path.
    pub fn root(&mut self, path: &str) -> ItemId {
        let id = self.next_id();
        self.push(Item::new(id, FOLDER_TEMPLATE_ID, path, self.database.clone()))
    }

    /// Add a child of `parent` with an explicit type reference.
    pub fn child(&mut self, parent: ItemId, name: &str, template_id: ItemId) -> ItemId {
        let id = self.next_id();
        self.child_with_id(parent, id, name, template_id)
    }

    /// Add a child with a caller-chosen id.
    pub fn child_with_id(
        &mut self,
        parent: ItemId,
        id: ItemId,
        name: &str,
        template_id: ItemId,
    ) -> ItemId {
        let path = format!("{}/{}", self.get(parent).path, name);
        let item = Item::new(id, template_id, path, self.database.clone()).with_parent(parent);
        self.push(item)
    }

    /// Add a folder.
    pub fn folder(&mut self, parent: ItemId, name: &str) -> ItemId {
        self.child(parent, name, FOLDER_TEMPLATE_ID)
    }

    /// Add a template.
    pub fn template(&mut self, parent: ItemId, name: &str) -> ItemId {
        self.child(parent, name, TEMPLATE_ID)
    }

    /// Add a template section.
    pub fn section(&mut self, template: ItemId, name: &str) -> ItemId {
        self.child(template, name, TEMPLATE_SECTION_ID)
    }

    /// Add a template field.
    pub fn field(&mut self, section: ItemId, name: &str) -> ItemId {
        self.child(section, name, TEMPLATE_FIELD_ID)
    }

    /// Set the base templates field to the pipe-joined ids.
    pub fn base_templates(&mut self, template: ItemId, bases: &[ItemId]) {
        let value = bases
            .iter()
            .map(ItemId::to_string)
            .collect::<Vec<_>>()
            .join("|");
        self.shared(template, BASE_TEMPLATES_FIELD_ID, &value);
    }

    /// Append a shared value.
    pub fn shared(&mut self, id: ItemId, field_id: ItemId, value: &str) {
        self.update(id, |item| item.with_shared(field_id, value));
    }

    /// Append an unversioned value.
    pub fn unversioned(&mut self, id: ItemId, language: &str, field_id: ItemId, value: &str) {
        self.update(id, |item| item.with_unversioned(language, field_id, value));
    }

    /// Append a versioned value.
    pub fn versioned(
        &mut self,
        id: ItemId,
        language: &str,
        version: u32,
        field_id: ItemId,
        value: &str,
    ) {
        self.update(id, |item| item.with_versioned(language, version, field_id, value));
    }

    /// Replace an item by applying `f` to it.
    pub fn update(&mut self, id: ItemId, f: impl FnOnce(Item) -> Item) {
        let index = self.index[&id];
        let item = self.items[index].clone();
        self.items[index] = f(item);
    }

    /// Look up an added item.
    pub fn get(&self, id: ItemId) -> &Item {
        &self.items[self.index[&id]]
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Consume the builder, returning its items.
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Consume the builder into a store.
    pub fn build(self) -> MemoryStore {
        MemoryStore::from_items(self.items).expect("fixture ids are unique")
    }

    fn next_id(&mut self) -> ItemId {
        let id = test_id(self.next);
        self.next += 1;
        id
    }

    fn push(&mut self, item: Item) -> ItemId {
        let id = item.id;
        self.index.insert(id, self.items.len());
        self.items.push(item);
        id
    }
}

/// A small project tree used across tests:
///
/// ```text
/// /sitecore/templates/Project        (folder)
/// ├── Base                           (template, section Metadata: Keywords)
/// └── Pages                          (folder)
///     └── Article                    (template, base: Base + standard)
///         ├── Content                (section: Title, Body)
///         └── Seo                    (section: Description)
/// ```
pub fn sample_project() -> (TreeBuilder, SampleIds) {
    let mut tree = TreeBuilder::new("master");

    let project = tree.root("/sitecore/templates/Project");
    let base = tree.template(project, "Base");
    let metadata = tree.section(base, "Metadata");
    let keywords = tree.field(metadata, "Keywords");

    let pages = tree.folder(project, "Pages");
    let article = tree.template(pages, "Article");
    tree.base_templates(article, &[base, stencil_types::STANDARD_TEMPLATE_ID]);
    let content = tree.section(article, "Content");
    let title = tree.field(content, "Title");
    let body = tree.field(content, "Body");
    let seo = tree.section(article, "Seo");
    let description = tree.field(seo, "Description");

    let ids = SampleIds {
        project,
        base,
        keywords,
        pages,
        article,
        title,
        body,
        description,
    };
    (tree, ids)
}

/// Ids of the items created by [`sample_project`].
#[derive(Debug, Clone, Copy)]
pub struct SampleIds {
    pub project: ItemId,
    pub base: ItemId,
    pub keywords: ItemId,
    pub pages: ItemId,
    pub article: ItemId,
    pub title: ItemId,
    pub body: ItemId,
    pub description: ItemId,
}
