//! Template extraction.
//!
//! For each root the store may return several seed items (ambiguous
//! paths). Each seed is walked breadth-first:
//!
//! 1. Excluded items are dropped together with their subtree.
//! 2. Templates are extracted; their children are not visited.
//! 3. Anything else is a container and its children are queued.
//!
//! Roots are independent, so they are scanned in parallel and the
//! per-root results concatenated.

use std::collections::{HashSet, VecDeque};

use rayon::prelude::*;
use stencil_store::{ContentStore, Item};
use stencil_types::{
    ItemId, TemplateFieldInfo, TemplateInfo, TreeRoot, BASE_TEMPLATES_FIELD_ID,
    DEFAULT_SORT_ORDER, DISPLAY_NAME_FIELD_ID, FIELD_TITLE_FIELD_ID, FIELD_TYPE_FIELD_ID,
    HELP_TEXT_FIELD_ID, SORT_ORDER_FIELD_ID, SOURCE_FIELD_ID, TEMPLATE_FIELD_ID,
    TEMPLATE_SECTION_ID,
};

use crate::config::Exclusions;
use crate::error::{ExtractError, ExtractResult};
use crate::fields::{parse_int, parse_multilist};
use crate::resolver::{is_template_item, FieldResolver, LayeredFieldResolver, TemplatePredicate};

/// Extracts template descriptors from a content store.
pub struct TemplateExtractor<S> {
    store: S,
    exclusions: Exclusions,
    resolver: Box<dyn FieldResolver>,
    is_template: TemplatePredicate,
}

impl<S: ContentStore> TemplateExtractor<S> {
    /// Create an extractor with the default field resolver and template
    /// predicate.
    pub fn new(store: S, exclusions: Exclusions) -> Self {
        Self {
            store,
            exclusions,
            resolver: Box::new(LayeredFieldResolver),
            is_template: Box::new(is_template_item),
        }
    }

    /// Replace the field resolver.
    pub fn with_field_resolver(mut self, resolver: impl FieldResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Replace the predicate that identifies template items.
    pub fn with_template_predicate(
        mut self,
        predicate: impl Fn(&Item) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.is_template = Box::new(predicate);
        self
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The exclusion sets in use.
    pub fn exclusions(&self) -> &Exclusions {
        &self.exclusions
    }

    /// Extract every template beneath the given roots.
    ///
    /// Roots are scanned in parallel. The result is the concatenation of
    /// the per-root results; templates reachable from several roots appear
    /// once per root. A store failure under any root fails the call.
    pub fn get_templates(&self, roots: &[TreeRoot]) -> ExtractResult<Vec<TemplateInfo>> {
        let per_root = roots
            .par_iter()
            .map(|root| self.templates_under(root))
            .collect::<ExtractResult<Vec<_>>>()?;

        let templates: Vec<TemplateInfo> = per_root.into_iter().flatten().collect();
        tracing::debug!(
            roots = roots.len(),
            templates = templates.len(),
            "Template extraction complete"
        );
        Ok(templates)
    }

    /// Extract every template beneath a single root.
    ///
    /// A root that matches no item yields an empty result.
    pub fn templates_under(&self, root: &TreeRoot) -> ExtractResult<Vec<TemplateInfo>> {
        let seeds = self.store.get_by_path(&root.path, &root.database)?;
        if seeds.is_empty() {
            tracing::warn!(root = %root, "Root matched no items");
            return Ok(Vec::new());
        }

        tracing::debug!(root = %root, seeds = seeds.len(), "Scanning root");

        let mut templates = Vec::new();
        for seed in seeds {
            for template in self.walk(seed) {
                templates.push(template?);
            }
        }
        Ok(templates)
    }

    /// Walk the subtree under `seed` breadth-first, yielding templates lazily.
    pub fn walk(&self, seed: Item) -> TemplateWalk<'_, S> {
        TemplateWalk {
            extractor: self,
            queue: VecDeque::from([seed]),
            seen: HashSet::new(),
        }
    }

    /// Build the descriptor for one template item.
    ///
    /// Fails with [`ExtractError::InvalidArgument`] if the item is not a
    /// template.
    pub fn parse_template(&self, item: &Item) -> ExtractResult<TemplateInfo> {
        if !(self.is_template)(item) {
            return Err(ExtractError::invalid_argument(format!(
                "item {} ({}) is not a template item",
                item.id, item.path
            )));
        }

        let base_templates = self.value_or(item, BASE_TEMPLATES_FIELD_ID, "");

        Ok(TemplateInfo {
            id: item.id,
            name: item.name.clone(),
            path: item.path.clone(),
            base_template_ids: self.base_template_ids(&base_templates),
            own_fields: self.parse_template_fields(item)?,
            help_text: self.value_or(item, HELP_TEXT_FIELD_ID, ""),
        })
    }

    /// Build descriptors for the fields defined directly on a template.
    ///
    /// Only field items that are children of section items that are
    /// children of the template are considered. Store order is kept.
    pub fn parse_template_fields(&self, template: &Item) -> ExtractResult<Vec<TemplateFieldInfo>> {
        let mut fields = Vec::new();

        let sections = self
            .store
            .get_children(template)?
            .into_iter()
            .filter(|child| child.is_instance_of(TEMPLATE_SECTION_ID));

        for section in sections {
            let section_fields = self
                .store
                .get_children(&section)?
                .into_iter()
                .filter(|child| child.is_instance_of(TEMPLATE_FIELD_ID));

            for field in section_fields {
                fields.push(self.parse_field(&section, &field));
            }
        }

        Ok(fields)
    }

    fn parse_field(&self, section: &Item, field: &Item) -> TemplateFieldInfo {
        // Only a field title absent from every layer falls back; an empty
        // title is kept.
        let display_name = match self.resolver.field_value(field, FIELD_TITLE_FIELD_ID) {
            Some(title) => title.to_string(),
            None => self.value_or(field, DISPLAY_NAME_FIELD_ID, ""),
        };

        TemplateFieldInfo {
            id: field.id,
            name: field.name.clone(),
            path: field.path.clone(),
            section: section.name.clone(),
            display_name,
            help_text: self.value_or(field, HELP_TEXT_FIELD_ID, ""),
            source: self.value_or(field, SOURCE_FIELD_ID, ""),
            field_type: self.value_or(field, FIELD_TYPE_FIELD_ID, ""),
            sort_order: self.int_or(field, SORT_ORDER_FIELD_ID, DEFAULT_SORT_ORDER),
            all_fields: self.resolver.all_fields(field),
        }
    }

    fn base_template_ids(&self, value: &str) -> Vec<ItemId> {
        parse_multilist(value)
            .into_iter()
            .filter(|id| !self.exclusions.is_base_template_excluded(id))
            .collect()
    }

    fn value_or(&self, item: &Item, field_id: ItemId, default: &str) -> String {
        self.resolver
            .field_value(item, field_id)
            .unwrap_or(default)
            .to_string()
    }

    fn int_or(&self, item: &Item, field_id: ItemId, default: i32) -> i32 {
        self.resolver
            .field_value(item, field_id)
            .and_then(parse_int)
            .unwrap_or(default)
    }
}

/// Lazy breadth-first walk over one subtree.
///
/// Yields one result per template found. After a store error the walk
/// yields that error and then ends. An item reached a second time through
/// a parent cycle is not visited again.
pub struct TemplateWalk<'a, S> {
    extractor: &'a TemplateExtractor<S>,
    queue: VecDeque<Item>,
    seen: HashSet<ItemId>,
}

impl<S: ContentStore> Iterator for TemplateWalk<'_, S> {
    type Item = ExtractResult<TemplateInfo>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(item) = self.queue.pop_front() {
            if !self.seen.insert(item.id) {
                tracing::warn!(
                    id = %item.id,
                    path = %item.path,
                    "Item reached twice through a parent cycle"
                );
                continue;
            }
            if self.extractor.exclusions.is_template_excluded(&item.id) {
                tracing::trace!(id = %item.id, path = %item.path, "Skipping excluded item");
                continue;
            }

            // Templates do not nest; anything beneath one is ignored.
            if (self.extractor.is_template)(&item) {
                tracing::trace!(id = %item.id, path = %item.path, "Found template");
                return Some(self.extractor.parse_template(&item));
            }

            match self.extractor.store.get_children(&item) {
                Ok(children) => self.queue.extend(children),
                Err(e) => {
                    self.queue.clear();
                    return Some(Err(e.into()));
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use stencil_store::MemoryStore;
    use stencil_types::{FOLDER_TEMPLATE_ID, STANDARD_TEMPLATE_ID, TEMPLATE_ID};

    fn id(n: u128) -> ItemId {
        ItemId::from_u128(n)
    }

    fn store() -> MemoryStore {
        MemoryStore::from_items(vec![
            Item::new(id(1), FOLDER_TEMPLATE_ID, "/templates", "master"),
            Item::new(id(2), TEMPLATE_ID, "/templates/Page", "master")
                .with_parent(id(1))
                .with_shared(
                    BASE_TEMPLATES_FIELD_ID,
                    format!("{}|{}", id(9), STANDARD_TEMPLATE_ID),
                ),
            Item::new(id(3), TEMPLATE_SECTION_ID, "/templates/Page/Content", "master")
                .with_parent(id(2)),
            Item::new(id(4), TEMPLATE_FIELD_ID, "/templates/Page/Content/Title", "master")
                .with_parent(id(3)),
        ])
        .unwrap()
    }

    #[test]
    fn test_walk_yields_template() {
        let extractor = TemplateExtractor::new(store(), Exclusions::default());
        let seed = extractor.store().get_by_id(id(1), "master").unwrap().unwrap();

        let templates: Vec<TemplateInfo> = extractor.walk(seed).map(Result::unwrap).collect();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].id, id(2));
        assert_eq!(templates[0].base_template_ids, vec![id(9)]);
        assert_eq!(templates[0].own_fields.len(), 1);
        assert_eq!(templates[0].own_fields[0].section, "Content");
    }

    #[test]
    fn test_parse_template_rejects_non_template() {
        let extractor = TemplateExtractor::new(store(), Exclusions::default());
        let folder = extractor.store().get_by_id(id(1), "master").unwrap().unwrap();

        let err = extractor.parse_template(&folder).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidArgument(_)));
    }

    #[test]
    fn test_parse_template_accepts_nil_id() {
        let extractor = TemplateExtractor::new(store(), Exclusions::default());
        let item = Item::new(ItemId::NIL, TEMPLATE_ID, "/templates/Nil", "master");

        let info = extractor.parse_template(&item).unwrap();
        assert!(info.id.is_nil());
        assert_eq!(info.name, "Nil");
    }

    #[test]
    fn test_walk_ends_on_parent_cycle() {
        // Two folders that name each other as parent, plus a template
        let store = MemoryStore::from_items(vec![
            Item::new(id(1), FOLDER_TEMPLATE_ID, "/loop/a", "master").with_parent(id(2)),
            Item::new(id(2), FOLDER_TEMPLATE_ID, "/loop/a/b", "master").with_parent(id(1)),
            Item::new(id(3), TEMPLATE_ID, "/loop/a/b/Page", "master").with_parent(id(2)),
        ])
        .unwrap();
        let extractor = TemplateExtractor::new(store, Exclusions::default());

        let templates = extractor
            .get_templates(&[TreeRoot::new("master", "/loop/a")])
            .unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].id, id(3));
    }

    #[test]
    fn test_sort_order_reads_through_resolver() {
        struct FixedSortOrder;

        impl FieldResolver for FixedSortOrder {
            fn field_value<'a>(&self, _item: &'a Item, field_id: ItemId) -> Option<&'a str> {
                (field_id == SORT_ORDER_FIELD_ID).then_some(" 7 ")
            }

            fn all_fields(&self, _item: &Item) -> BTreeMap<ItemId, String> {
                BTreeMap::new()
            }
        }

        let extractor =
            TemplateExtractor::new(store(), Exclusions::default()).with_field_resolver(FixedSortOrder);
        let templates = extractor
            .get_templates(&[TreeRoot::new("master", "/templates")])
            .unwrap();
        assert_eq!(templates[0].own_fields[0].sort_order, 7);
        assert_eq!(templates[0].own_fields[0].display_name, "");
    }

    #[test]
    fn test_custom_template_predicate() {
        // Items named "Content" count as templates, whatever their type
        let extractor = TemplateExtractor::new(store(), Exclusions::default())
            .with_template_predicate(|item: &Item| item.name == "Content");

        let templates = extractor
            .get_templates(&[TreeRoot::new("master", "/templates")])
            .unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].id, id(3));
        assert!(templates[0].own_fields.is_empty());
    }
}
