//! Layered field resolution.
//!
//! Layers are always scanned in the order shared, unversioned (every
//! language), versioned (every version). The two views differ on conflicts:
//!
//! - [`field_value`] returns the first value found, so the shared layer
//!   shadows the others.
//! - [`all_fields`] writes every layer into one map in scan order, so the
//!   versioned layer has the final say.
//!
//! Callers rely on both behaviours; they must not be unified.

use std::collections::BTreeMap;

use stencil_store::{FieldSource, FieldValue};
use stencil_types::{ItemId, MULTILIST_SEPARATOR};

/// All stored values of an item in resolution order.
fn layered<F: FieldSource + ?Sized>(item: &F) -> impl Iterator<Item = &FieldValue> {
    item.shared_fields()
        .iter()
        .chain(item.flat_unversioned_fields())
        .chain(item.flat_versioned_fields())
}

/// Typed lookup: the first value stored for `field_id`.
///
/// Returns `None` only when no layer holds the field at all; a stored
/// empty string is returned as `Some("")`.
pub fn field_value<F: FieldSource + ?Sized>(item: &F, field_id: ItemId) -> Option<&str> {
    layered(item)
        .find(|field| field.field_id == field_id)
        .map(|field| field.value.as_str())
}

/// Typed lookup with a default for absent fields.
pub fn field_value_or<F: FieldSource + ?Sized>(
    item: &F,
    field_id: ItemId,
    default: &str,
) -> String {
    field_value(item, field_id).unwrap_or(default).to_string()
}

/// Typed lookup parsed as an integer.
///
/// Returns `default` when the field is absent or its value is not an
/// integer after trimming whitespace.
pub fn field_value_as_int<F: FieldSource + ?Sized>(item: &F, field_id: ItemId, default: i32) -> i32 {
    field_value(item, field_id)
        .and_then(parse_int)
        .unwrap_or(default)
}

/// Every stored value keyed by field id; later layers overwrite earlier ones.
pub fn all_fields<F: FieldSource + ?Sized>(item: &F) -> BTreeMap<ItemId, String> {
    let mut fields = BTreeMap::new();
    for field in layered(item) {
        fields.insert(field.field_id, field.value.clone());
    }
    fields
}

/// Parse a pipe-delimited list of identifiers.
///
/// Tokens that are not identifiers, and the nil identifier, are dropped.
/// Order and duplicates are preserved.
pub fn parse_multilist(value: &str) -> Vec<ItemId> {
    value
        .split(MULTILIST_SEPARATOR)
        .filter_map(ItemId::try_parse)
        .filter(|id| !id.is_nil())
        .collect()
}

pub(crate) fn parse_int(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}
