//! CLI configuration.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use stencil_extract::ExclusionConfig;
use stencil_types::TreeRoot;

use crate::error::{CliError, CliResult};

/// Expand environment variables in a string.
/// Supports `${VAR_NAME}` syntax; unset variables are left as written.
fn expand_env_vars(input: &str) -> CliResult<String> {
    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}")
        .map_err(|e| CliError::config(format!("Invalid expansion pattern: {}", e)))?;
    Ok(re
        .replace_all(input, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| caps[0].to_string())
        })
        .to_string())
}

/// CLI configuration loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Serialized item store.
    pub store: StoreConfig,
    /// Roots scanned when none are given on the command line.
    pub roots: Vec<TreeRoot>,
    /// Excluded templates and base templates.
    pub exclusions: ExclusionConfig,
}

impl CliConfig {
    /// Load configuration from a file.
    /// A missing file yields the defaults. `${VAR}` references in the store
    /// path are expanded.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&contents)?;

        if let Some(store) = &config.store.path {
            config.store.path = Some(expand_env_vars(store)?);
        }

        Ok(config)
    }

    /// Load configuration from the default location.
    pub fn load_default() -> CliResult<Self> {
        Self::load(&default_config_path())
    }

    /// The configured store directory, if any.
    pub fn store_dir(&self) -> Option<PathBuf> {
        self.store.path.as_ref().map(PathBuf::from)
    }
}

/// Store configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory of serialized items.
    #[serde(default)]
    pub path: Option<String>,
}

/// Get the stencil configuration directory.
///
/// `STENCIL_CONFIG_DIR` overrides the platform default.
pub fn default_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("STENCIL_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    directories::ProjectDirs::from("rs", "stencil", "stencil")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| {
            std::env::var("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(".stencil")
        })
}

/// Get the default config file path.
pub fn default_config_path() -> PathBuf {
    default_config_dir().join("config.toml")
}
