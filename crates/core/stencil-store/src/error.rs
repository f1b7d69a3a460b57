//! Error types for the storage layer.
//!
//! This module defines the error types used throughout the stencil-store crate.

use std::path::PathBuf;

use stencil_types::ItemId;
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error while reading serialized items.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A serialized item could not be parsed.
    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// Two items with the same id were added to one database.
    #[error("Duplicate item {id} in database '{database}'")]
    DuplicateId { id: ItemId, database: String },

    /// An item names itself as its parent.
    #[error("Item {id} in database '{database}' is its own parent")]
    SelfParent { id: ItemId, database: String },

    /// Invalid data format.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl StoreError {
    /// Create a parse error for a file.
    pub fn parse(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        StoreError::Parse {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create an invalid data error.
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        StoreError::InvalidData(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::DuplicateId {
            id: ItemId::from_u128(1),
            database: "master".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Duplicate item"));
        assert!(msg.contains("master"));
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = StoreError::parse("items/home.yml", "missing field `ID`");
        let msg = err.to_string();
        assert!(msg.contains("items/home.yml"));
        assert!(msg.contains("missing field"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let store_err: StoreError = io_err.into();
        assert!(matches!(store_err, StoreError::Io(_)));
    }
}
