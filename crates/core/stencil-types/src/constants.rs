//! Well-known identifiers and defaults.
//!
//! These identifiers are fixed by the content store's system schema and are
//! not configurable.

use crate::ItemId;

// =============================================================================
// Type References
// =============================================================================

/// Type reference of template definition items.
pub const TEMPLATE_ID: ItemId = ItemId::from_u128(0xAB86861A_6030_46C5_B394_E8F99E8B87DB);

/// Type reference of template section items.
pub const TEMPLATE_SECTION_ID: ItemId =
    ItemId::from_u128(0xE269FBB5_3750_427A_9149_7AA950B49301);

/// Type reference of template field items.
pub const TEMPLATE_FIELD_ID: ItemId = ItemId::from_u128(0x455A3E98_A627_4B40_8035_E683A0331AC7);

// =============================================================================
// Field References
// =============================================================================

/// Display name of any item.
pub const DISPLAY_NAME_FIELD_ID: ItemId =
    ItemId::from_u128(0xB5E02AD9_D56F_4C41_A065_A133DB87BDEB);

/// Title of a template field; preferred over the display name.
pub const FIELD_TITLE_FIELD_ID: ItemId =
    ItemId::from_u128(0x19A69332_A23E_4E70_8D16_B2640CB24CC8);

/// Long description shown to editors.
pub const HELP_TEXT_FIELD_ID: ItemId = ItemId::from_u128(0x577F1689_7DE4_4AD2_A15F_7FDC1759285F);

/// Field type name of a template field (e.g. "Single-Line Text").
pub const FIELD_TYPE_FIELD_ID: ItemId = ItemId::from_u128(0xAB162CC0_DC80_4ABF_8871_998EE5D7BA32);

/// Data source of a template field.
pub const SOURCE_FIELD_ID: ItemId = ItemId::from_u128(0x1EB8AE32_E190_44A6_968D_ED904C794EBF);

/// Sort order of an item among its siblings.
pub const SORT_ORDER_FIELD_ID: ItemId = ItemId::from_u128(0xBA3F86A2_4A1C_4D78_B63D_91C2779C1B5E);

/// Pipe-delimited list of direct base templates.
pub const BASE_TEMPLATES_FIELD_ID: ItemId =
    ItemId::from_u128(0x12C33F3F_86C5_43A5_AEB4_5598CEC45116);

// =============================================================================
// Built-in Base Templates
// =============================================================================

/// The standard fields template every template implicitly inherits.
pub const STANDARD_TEMPLATE_ID: ItemId =
    ItemId::from_u128(0x1930BBEB_7805_471A_A3BE_4858AC7CF696);

/// The generic folder template.
pub const FOLDER_TEMPLATE_ID: ItemId = ItemId::from_u128(0xA87A00B1_E6DB_45AB_8B54_636FEC3B5523);

/// Base templates that are always excluded from `base_template_ids`.
pub const BUILTIN_EXCLUDED_BASE_TEMPLATES: [ItemId; 2] = [STANDARD_TEMPLATE_ID, FOLDER_TEMPLATE_ID];

// =============================================================================
// Defaults
// =============================================================================

/// Sort order used when the sort order field is absent or not an integer.
pub const DEFAULT_SORT_ORDER: i32 = 100;

/// Separator between identifiers in multilist field values.
pub const MULTILIST_SEPARATOR: char = '|';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_match_braced_form() {
        assert_eq!(
            TEMPLATE_ID.to_string(),
            "{AB86861A-6030-46C5-B394-E8F99E8B87DB}"
        );
        assert_eq!(
            STANDARD_TEMPLATE_ID.to_string(),
            "{1930BBEB-7805-471A-A3BE-4858AC7CF696}"
        );
        assert_eq!(
            FOLDER_TEMPLATE_ID,
            ItemId::parse("a87a00b1-e6db-45ab-8b54-636fec3b5523").unwrap()
        );
    }

    #[test]
    fn test_type_references_distinct() {
        assert_ne!(TEMPLATE_ID, TEMPLATE_SECTION_ID);
        assert_ne!(TEMPLATE_ID, TEMPLATE_FIELD_ID);
        assert_ne!(TEMPLATE_SECTION_ID, TEMPLATE_FIELD_ID);
    }
}
