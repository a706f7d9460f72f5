//! Commit command - record a new journal entry.

use anyhow::Result;
use colored::Colorize;

use life_commit::config::Config;
use life_commit::journal::{record_interactive, Journal};

use super::load_vocabulary;
use crate::cli::prompt::TerminalPrompter;

/// Arguments for the commit command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    life commit            Answer the prompts to add a commit")]
pub struct Args {}

/// Executes the commit command.
///
/// Prompts for a lifemoji, title, message and date, then appends the
/// commit to the store.
pub fn run(_args: Args, config: &Config) -> Result<()> {
    let journal = Journal::new(config.paths());
    journal.ensure_initialized()?;

    let vocabulary = load_vocabulary(config)?;
    let mut prompter = TerminalPrompter::stdio();
    let commit = record_interactive(&journal, &mut prompter, &vocabulary)?;

    tracing::debug!(id = %commit.id, "Recorded commit");
    println!("{}", "1 commit added".green());
    Ok(())
}
