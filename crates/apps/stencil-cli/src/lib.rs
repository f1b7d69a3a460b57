//! Command-line interface for stencil.
//!
//! This crate provides the `stencil` binary, which loads a serialized
//! content tree and extracts the template definitions beneath one or more
//! roots. It includes commands for:
//!
//! - **Extraction**: List every template with its base templates and fields
//! - **Inspection**: Show how an item's field layers resolve
//! - **Completions**: Generate shell completion scripts
//!
//! # Quick Start
//!
//! ```bash
//! # Extract templates from a serialized tree
//! stencil extract --store ./serialization --root master:/sitecore/templates/Project
//!
//! # Same, as JSON for code generation
//! stencil --format json extract --store ./serialization --root master:/sitecore/templates
//!
//! # Look at one item's fields
//! stencil inspect --store ./serialization master:/sitecore/templates/Project/Page
//! ```
//!
//! # Output Formats
//!
//! All commands support `--format` for output control:
//!
//! - `human` (default): Human-readable with colors
//! - `json`: Machine-readable JSON
//!
//! # Configuration
//!
//! Configuration is loaded from `<config dir>/stencil/config.toml`
//! (`STENCIL_CONFIG_DIR` overrides the directory). Override the file with
//! `--config`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Commands};
pub use config::CliConfig;
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, Render};
