//! Output formatting for CLI.

use std::collections::BTreeMap;

use colored::Colorize;
use serde::Serialize;
use stencil_types::{ItemId, TemplateInfo};

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use 'human' or 'json'.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Trait for renderable output.
pub trait Render {
    /// Render as human-readable string.
    fn render_human(&self) -> String;

    /// Render as JSON string.
    fn render_json(&self) -> String;

    /// Render in the specified format.
    fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Human => self.render_human(),
            OutputFormat::Json => self.render_json(),
        }
    }
}

// =============================================================================
// Output Types
// =============================================================================

/// Output for the extract command.
#[derive(Debug)]
pub struct ExtractOutput {
    pub templates: Vec<TemplateInfo>,
}

impl Render for ExtractOutput {
    fn render_human(&self) -> String {
        if self.templates.is_empty() {
            return "No templates found.".dimmed().to_string();
        }

        let mut blocks = Vec::with_capacity(self.templates.len() + 1);
        for template in &self.templates {
            blocks.push(render_template(template));
        }
        blocks.push(format!("{} {}", "Templates:".bold(), self.templates.len()));
        blocks.join("\n\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(&self.templates).unwrap_or_default()
    }
}

fn render_template(template: &TemplateInfo) -> String {
    let mut lines = vec![
        format!(
            "{} {}",
            template.name.green().bold(),
            template.id.to_string().dimmed()
        ),
        format!("  {} {}", "Path:".bold(), template.path),
    ];

    if !template.base_template_ids.is_empty() {
        let bases: Vec<String> = template
            .base_template_ids
            .iter()
            .map(ItemId::to_string)
            .collect();
        lines.push(format!("  {} {}", "Base:".bold(), bases.join(", ")));
    }
    if !template.help_text.is_empty() {
        lines.push(format!("  {} {}", "Help:".bold(), template.help_text));
    }

    for section in template.sections() {
        lines.push(format!("  [{}]", section.cyan()));
        for field in template.fields_in_section(section) {
            let field_type: &str = if field.field_type.is_empty() {
                "?"
            } else {
                &field.field_type
            };
            lines.push(format!(
                "    {} ({}, sort {})",
                field.name, field_type, field.sort_order
            ));
        }
    }

    lines.join("\n")
}

/// One item shown by the inspect command.
#[derive(Debug, Serialize)]
pub struct InspectedItem {
    pub id: ItemId,
    pub name: String,
    pub path: String,
    pub template_id: ItemId,
    pub is_template: bool,
    pub display_name: Option<String>,
    pub field_title: Option<String>,
    pub help_text: Option<String>,
    pub field_type: Option<String>,
    pub source: Option<String>,
    pub sort_order: i32,
    pub base_template_ids: Vec<ItemId>,
    pub all_fields: BTreeMap<ItemId, String>,
}

/// Output for the inspect command.
#[derive(Debug, Serialize)]
pub struct InspectOutput {
    pub root: String,
    pub items: Vec<InspectedItem>,
}

impl Render for InspectOutput {
    fn render_human(&self) -> String {
        let mut blocks = Vec::with_capacity(self.items.len());

        for item in &self.items {
            let mut lines = vec![
                format!("{} {}", item.name.bold(), item.id.to_string().dimmed()),
                format!("  {} {}", "Path:".bold(), item.path),
                format!(
                    "  {} {}{}",
                    "Type:".bold(),
                    item.template_id,
                    if item.is_template { " (template)" } else { "" }
                ),
            ];

            let typed = [
                ("Display name", &item.display_name),
                ("Field title", &item.field_title),
                ("Help text", &item.help_text),
                ("Field type", &item.field_type),
                ("Source", &item.source),
            ];
            for (label, value) in typed {
                if let Some(value) = value {
                    lines.push(format!("  {} {:?}", format!("{}:", label).bold(), value));
                }
            }
            lines.push(format!("  {} {}", "Sort order:".bold(), item.sort_order));

            if !item.base_template_ids.is_empty() {
                lines.push(format!("  {}", "Base templates:".bold()));
                for id in &item.base_template_ids {
                    lines.push(format!("    {}", id));
                }
            }

            if !item.all_fields.is_empty() {
                lines.push(format!("  {}", "All fields:".bold()));
                for (id, value) in &item.all_fields {
                    lines.push(format!("    {} = {:?}", id.to_string().dimmed(), value));
                }
            }

            blocks.push(lines.join("\n"));
        }

        blocks.join("\n\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stencil_types::TemplateFieldInfo;

    fn template() -> TemplateInfo {
        TemplateInfo {
            id: ItemId::from_u128(1),
            name: "Article".to_string(),
            path: "/sitecore/templates/Article".to_string(),
            base_template_ids: vec![ItemId::from_u128(2)],
            own_fields: vec![TemplateFieldInfo {
                id: ItemId::from_u128(3),
                name: "Title".to_string(),
                path: "/sitecore/templates/Article/Content/Title".to_string(),
                section: "Content".to_string(),
                display_name: "Title".to_string(),
                help_text: String::new(),
                source: String::new(),
                field_type: "Single-Line Text".to_string(),
                sort_order: 100,
                all_fields: BTreeMap::new(),
            }],
            help_text: String::new(),
        }
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_extract_human() {
        colored::control::set_override(false);
        let output = ExtractOutput {
            templates: vec![template()],
        };

        let text = output.render(OutputFormat::Human);
        assert!(text.contains("Article"));
        assert!(text.contains("[Content]"));
        assert!(text.contains("Title (Single-Line Text, sort 100)"));
        assert!(text.contains("Templates: 1"));
    }

    #[test]
    fn test_extract_json_is_array() {
        let output = ExtractOutput {
            templates: vec![template()],
        };

        let json: serde_json::Value =
            serde_json::from_str(&output.render(OutputFormat::Json)).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["own_fields"][0]["type"], "Single-Line Text");
    }

    #[test]
    fn test_extract_empty() {
        let output = ExtractOutput { templates: vec![] };
        assert!(output.render_human().contains("No templates found."));
        assert_eq!(output.render_json(), "[]");
    }
}
