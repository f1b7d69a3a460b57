//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use stencil_types::TreeRoot;

use crate::output::OutputFormat;

/// Stencil CLI.
#[derive(Parser, Debug)]
#[command(name = "stencil")]
#[command(author = "Stencil Contributors")]
#[command(version)]
#[command(about = "Extract template definitions from serialized content trees")]
#[command(
    long_about = "Stencil walks a serialized content tree and lists every template beneath the given roots, with its base templates and fields grouped by section.\n\nRun 'stencil extract --store <dir> --root master:/sitecore/templates' to get started."
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (human or json).
    #[arg(short, long, global = true, default_value = "human")]
    pub format: OutputFormatArg,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Output format argument for clap.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormatArg {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract templates beneath one or more roots.
    ///
    /// Loads the serialized tree, walks every root and prints each template
    /// with its base templates and fields.
    Extract {
        /// Directory of serialized items (defaults to `[store] path`).
        #[arg(short, long, env = "STENCIL_STORE")]
        store: Option<PathBuf>,

        /// Root to scan, written as database:/path. Repeatable.
        ///
        /// Defaults to the `[[roots]]` entries in the configuration file.
        #[arg(short, long = "root")]
        roots: Vec<TreeRoot>,
    },

    /// Show the items at a path and how their fields resolve.
    Inspect {
        /// Directory of serialized items (defaults to `[store] path`).
        #[arg(short, long, env = "STENCIL_STORE")]
        store: Option<PathBuf>,

        /// Item to inspect, written as database:/path.
        root: TreeRoot,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: CompletionShell,
    },
}

/// Shells supported by the completions command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_extract() {
        let cli = Cli::try_parse_from([
            "stencil",
            "--format",
            "json",
            "extract",
            "--store",
            "items",
            "--root",
            "master:/sitecore/templates/Project",
            "-r",
            "web:/sitecore/templates",
        ])
        .unwrap();

        assert!(matches!(cli.format, OutputFormatArg::Json));
        match cli.command {
            Commands::Extract { store, roots } => {
                assert_eq!(store, Some(PathBuf::from("items")));
                assert_eq!(
                    roots,
                    vec![
                        TreeRoot::new("master", "/sitecore/templates/Project"),
                        TreeRoot::new("web", "/sitecore/templates"),
                    ]
                );
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_bad_root() {
        let result = Cli::try_parse_from(["stencil", "inspect", "no-database"]);
        assert!(result.is_err());
    }
}
