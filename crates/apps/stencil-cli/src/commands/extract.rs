//! Extract templates command.

use std::path::PathBuf;

use stencil_extract::{Exclusions, TemplateExtractor};
use stencil_types::TreeRoot;

use crate::commands::open_store;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{ExtractOutput, OutputFormat, Render};

/// Execute the extract command.
pub fn extract(
    config: CliConfig,
    format: OutputFormat,
    store: Option<PathBuf>,
    roots: Vec<TreeRoot>,
) -> CliResult<String> {
    let roots = if roots.is_empty() {
        config.roots.clone()
    } else {
        roots
    };
    if roots.is_empty() {
        return Err(CliError::user(
            "No roots given. Pass --root database:/path or add [[roots]] to config.",
        ));
    }

    // Fail on bad exclusion entries before touching the store
    let exclusions = Exclusions::from_config(&config.exclusions)?;
    let store = open_store(&config, store)?;

    let extractor = TemplateExtractor::new(store, exclusions);
    let templates = extractor.get_templates(&roots)?;

    tracing::info!(
        roots = roots.len(),
        templates = templates.len(),
        "Extracted templates"
    );

    Ok(ExtractOutput { templates }.render(format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use stencil_extract::ExclusionConfig;
    use stencil_test_utils::{sample_project, write_serialized_tree};
    use tempfile::TempDir;

    const PROJECT: &str = "/sitecore/templates/Project";

    fn setup_store(temp_dir: &TempDir) -> PathBuf {
        let (tree, _) = sample_project();
        let dir = temp_dir.path().join("items");
        write_serialized_tree(&dir, tree.items()).unwrap();
        dir
    }

    #[test]
    fn test_extract_json() {
        let temp_dir = TempDir::new().unwrap();
        let dir = setup_store(&temp_dir);

        let output = extract(
            CliConfig::default(),
            OutputFormat::Json,
            Some(dir),
            vec![TreeRoot::new("master", PROJECT)],
        )
        .unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        let names: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Base", "Article"]);
    }

    #[test]
    fn test_extract_uses_config_store_and_roots() {
        let temp_dir = TempDir::new().unwrap();
        let dir = setup_store(&temp_dir);

        let config = CliConfig {
            store: StoreConfig {
                path: Some(dir.to_string_lossy().into_owned()),
            },
            roots: vec![TreeRoot::new("master", format!("{}/Pages", PROJECT))],
            exclusions: ExclusionConfig::default(),
        };

        let output = extract(config, OutputFormat::Json, None, vec![]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["name"], "Article");
    }

    #[test]
    fn test_extract_without_roots() {
        let temp_dir = TempDir::new().unwrap();
        let dir = setup_store(&temp_dir);

        let err =
            extract(CliConfig::default(), OutputFormat::Human, Some(dir), vec![]).unwrap_err();
        assert!(matches!(err, CliError::User(_)));
    }

    #[test]
    fn test_extract_without_store() {
        let err = extract(
            CliConfig::default(),
            OutputFormat::Human,
            None,
            vec![TreeRoot::new("master", PROJECT)],
        )
        .unwrap_err();
        assert!(matches!(err, CliError::User(_)));
    }

    #[test]
    fn test_extract_bad_exclusion() {
        let temp_dir = TempDir::new().unwrap();
        let dir = setup_store(&temp_dir);

        let mut config = CliConfig::default();
        config.exclusions = ExclusionConfig::new().with_excluded_template("not-an-id");

        let err = extract(
            config,
            OutputFormat::Human,
            Some(dir),
            vec![TreeRoot::new("master", PROJECT)],
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("not-an-id"));
    }
}
