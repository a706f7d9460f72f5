//! Edit command - change or remove a commit.
//!
//! The commit is found by any fragment of its id, not only a prefix; the
//! first match in the store wins.

use anyhow::Result;
use colored::Colorize;

use life_commit::config::Config;
use life_commit::journal::{edit_interactive, EditOutcome, Journal};

use super::load_vocabulary;
use crate::cli::prompt::TerminalPrompter;

/// Arguments for the edit command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    life edit 1a2b3c       Edit or remove the commit whose id contains 1a2b3c")]
pub struct Args {
    /// Fragment of the commit id
    #[arg(value_name = "ID")]
    #[arg(long_help = "Any part of the commit id. Use 'life log' to see the\n\
        short ids; the first commit whose id contains the fragment is used.")]
    pub id: Option<String>,
}

/// Executes the edit command.
pub fn run(args: Args, config: &Config) -> Result<()> {
    let journal = Journal::new(config.paths());
    let mut prompter = TerminalPrompter::stdio();

    let outcome = edit_interactive(&journal, &mut prompter, args.id.as_deref(), || {
        load_vocabulary(config)
    })?;

    match outcome {
        EditOutcome::Removed(_) => println!("{}", "1 commit removed".red()),
        EditOutcome::Edited(_) => println!("{}", "1 commit edited".blue()),
    }
    Ok(())
}
