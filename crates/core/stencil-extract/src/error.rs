//! Error types for template extraction.
//!
//! This module defines the `ExtractError` enum used by every extraction
//! function in this crate.

use stencil_store::StoreError;
use thiserror::Error;

/// Result type for extraction.
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while configuring or running extraction.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtractError {
    /// An exclusion entry is not a valid identifier.
    #[error("configuration error: {0}")]
    Config(String),

    /// A function was called with an item it cannot handle.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The content store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl ExtractError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        ExtractError::Config(msg.into())
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        ExtractError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExtractError::config("'x' is not a valid identifier");
        assert_eq!(
            err.to_string(),
            "configuration error: 'x' is not a valid identifier"
        );

        let err = ExtractError::invalid_argument("not a template");
        assert!(err.to_string().starts_with("invalid argument"));
    }

    #[test]
    fn test_error_from_store() {
        let err: ExtractError = StoreError::invalid_data("bad").into();
        assert!(matches!(err, ExtractError::Store(_)));
    }
}
