//! Inspect items command.

use std::path::PathBuf;

use stencil_extract::{fields, is_template_item};
use stencil_store::{ContentStore, Item};
use stencil_types::{
    TreeRoot, BASE_TEMPLATES_FIELD_ID, DEFAULT_SORT_ORDER, DISPLAY_NAME_FIELD_ID,
    FIELD_TITLE_FIELD_ID, FIELD_TYPE_FIELD_ID, HELP_TEXT_FIELD_ID, SORT_ORDER_FIELD_ID,
    SOURCE_FIELD_ID,
};

use crate::commands::open_store;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{InspectOutput, InspectedItem, OutputFormat, Render};

/// Execute the inspect command.
pub fn inspect(
    config: CliConfig,
    format: OutputFormat,
    store: Option<PathBuf>,
    root: TreeRoot,
) -> CliResult<String> {
    let store = open_store(&config, store)?;

    let items = store.get_by_path(&root.path, &root.database)?;
    if items.is_empty() {
        return Err(CliError::NotFound(root.to_string()));
    }

    let output = InspectOutput {
        root: root.to_string(),
        items: items.iter().map(inspect_item).collect(),
    };

    Ok(output.render(format))
}

fn inspect_item(item: &Item) -> InspectedItem {
    let typed = |field_id| fields::field_value(item, field_id).map(str::to_string);

    InspectedItem {
        id: item.id,
        name: item.name.clone(),
        path: item.path.clone(),
        template_id: item.template_id,
        is_template: is_template_item(item),
        display_name: typed(DISPLAY_NAME_FIELD_ID),
        field_title: typed(FIELD_TITLE_FIELD_ID),
        help_text: typed(HELP_TEXT_FIELD_ID),
        field_type: typed(FIELD_TYPE_FIELD_ID),
        source: typed(SOURCE_FIELD_ID),
        sort_order: fields::field_value_as_int(item, SORT_ORDER_FIELD_ID, DEFAULT_SORT_ORDER),
        base_template_ids: fields::parse_multilist(&fields::field_value_or(
            item,
            BASE_TEMPLATES_FIELD_ID,
            "",
        )),
        all_fields: fields::all_fields(item),
    }
}
