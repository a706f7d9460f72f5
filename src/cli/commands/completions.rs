//! Completions command - generate shell completion scripts.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io;

/// Arguments for the completions command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    life completions bash > ~/.local/share/bash-completion/completions/life\n    \
    life completions zsh > ~/.zfunc/_life\n    \
    life completions fish > ~/.config/fish/completions/life.fish")]
pub struct Args {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Writes the completion script for `shell` to stdout.
///
/// Called from main.rs, which owns the `Cli` definition.
pub fn generate_completions(cmd: &mut Command, shell: Shell) {
    generate(shell, cmd, "life", &mut io::stdout());
}
