//! CLI error types.

use stencil_extract::ExtractError;
use thiserror::Error;

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error enum wrapping all crate errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Extraction error.
    #[error("{0}")]
    Extract(#[from] ExtractError),

    /// Store error.
    #[error("{0}")]
    Store(#[from] stencil_store::StoreError),

    /// IO error.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// User-facing error with actionable message.
    #[error("{0}")]
    User(String),

    /// No item matched a root.
    #[error("No item found at {0}")]
    NotFound(String),
}

impl CliError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a user-facing error.
    pub fn user(msg: impl Into<String>) -> Self {
        Self::User(msg.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::User(_) => 1,
            Self::NotFound(_) => 2,
            Self::Config(_) | Self::Toml(_) | Self::Extract(ExtractError::Config(_)) => 3,
            Self::Store(_) | Self::Extract(ExtractError::Store(_)) => 5,
            Self::Extract(_) => 4,
            Self::Io(_) => 6,
            Self::Json(_) => 7,
        }
    }

    /// A recovery hint shown under the error, if one applies.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) | Self::Toml(_) | Self::Extract(ExtractError::Config(_)) => {
                Some("Check the configuration file passed with --config.")
            }
            Self::NotFound(_) => {
                Some("Roots are written as database:/path, e.g. master:/sitecore/templates.")
            }
            Self::Store(_) | Self::Extract(ExtractError::Store(_)) => {
                Some("Point --store at a directory of serialized .yml items.")
            }
            _ => None,
        }
    }
}
