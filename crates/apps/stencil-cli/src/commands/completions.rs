//! Shell completions command.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::{Cli, CompletionShell};
use crate::error::CliResult;

/// Generate shell completions for the specified shell.
pub fn completions(shell: CompletionShell) -> CliResult<String> {
    let mut buf = Vec::new();
    write_completions(shell, &mut buf);
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_completions(shell: CompletionShell, out: &mut dyn io::Write) {
    let mut cmd = Cli::command();
    let shell = match shell {
        CompletionShell::Bash => Shell::Bash,
        CompletionShell::Zsh => Shell::Zsh,
        CompletionShell::Fish => Shell::Fish,
        CompletionShell::PowerShell => Shell::PowerShell,
    };

    generate(shell, &mut cmd, "stencil", out);
}
