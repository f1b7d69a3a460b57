//! Error types for stencil-types.

use thiserror::Error;

/// Errors that can occur while parsing identifiers and root descriptors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdParseError {
    /// The input is not a recognised identifier form.
    #[error("'{0}' is not a valid identifier")]
    InvalidId(String),

    /// A root descriptor is not in `database:/path` form.
    #[error("'{0}' is not a valid root (expected 'database:/path')")]
    InvalidRoot(String),
}
