//! CLI command implementations.

pub mod completions;
pub mod extract;
pub mod inspect;

// Re-export command handlers
pub use completions::completions;
pub use extract::extract;
pub use inspect::inspect;

use std::path::PathBuf;

use stencil_store::{yaml, MemoryStore};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Load the serialized store named on the command line or in config.
pub(crate) fn open_store(config: &CliConfig, store: Option<PathBuf>) -> CliResult<MemoryStore> {
    let dir = store.or_else(|| config.store_dir()).ok_or_else(|| {
        CliError::user("No store directory given. Pass --store or set [store] path in config.")
    })?;
    Ok(yaml::load_dir(&dir)?)
}
