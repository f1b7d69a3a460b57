//! Pluggable extraction steps.
//!
//! [`TemplateExtractor`](crate::TemplateExtractor) delegates two decisions
//! so callers can vary them without forking the traversal:
//!
//! - how field values are read from an item ([`FieldResolver`])
//! - which items count as templates ([`TemplatePredicate`])

use std::collections::BTreeMap;

use stencil_store::Item;
use stencil_types::{ItemId, TEMPLATE_ID};

use crate::fields;

/// Reads field values from items.
pub trait FieldResolver: Send + Sync {
    /// Typed lookup; `None` when the field is absent from every layer.
    fn field_value<'a>(&self, item: &'a Item, field_id: ItemId) -> Option<&'a str>;

    /// Every stored value keyed by field id.
    fn all_fields(&self, item: &Item) -> BTreeMap<ItemId, String>;
}

/// The default resolver: shared, then unversioned, then versioned.
///
/// See [`fields`](crate::fields) for the precedence rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayeredFieldResolver;

impl FieldResolver for LayeredFieldResolver {
    fn field_value<'a>(&self, item: &'a Item, field_id: ItemId) -> Option<&'a str> {
        fields::field_value(item, field_id)
    }

    fn all_fields(&self, item: &Item) -> BTreeMap<ItemId, String> {
        fields::all_fields(item)
    }
}

/// Decides whether an item is a template definition.
pub type TemplatePredicate = Box<dyn Fn(&Item) -> bool + Send + Sync>;

/// The default predicate: the item's type reference is the Template type.
pub fn is_template_item(item: &Item) -> bool {
    item.is_instance_of(TEMPLATE_ID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stencil_types::FOLDER_TEMPLATE_ID;

    #[test]
    fn test_is_template_item() {
        let template = Item::new(ItemId::from_u128(1), TEMPLATE_ID, "/t", "master");
        let folder = Item::new(ItemId::from_u128(2), FOLDER_TEMPLATE_ID, "/f", "master");
        assert!(is_template_item(&template));
        assert!(!is_template_item(&folder));
    }

    #[test]
    fn test_resolver_is_object_safe() {
        let resolver: Box<dyn FieldResolver> = Box::new(LayeredFieldResolver);
        let item = Item::new(ItemId::from_u128(1), TEMPLATE_ID, "/t", "master")
            .with_shared(ItemId::from_u128(5), "v");
        assert_eq!(resolver.field_value(&item, ItemId::from_u128(5)), Some("v"));
        assert_eq!(resolver.all_fields(&item).len(), 1);
    }
}
