//! Init command - create the commit store.

use anyhow::Result;
use colored::Colorize;

use life_commit::config::Config;
use life_commit::journal::Journal;

/// Arguments for the init command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    life init              Create ~/.life-commit/commits.json")]
pub struct Args {}

/// Executes the init command.
///
/// Creates an empty store. Running it again fails rather than wiping the
/// existing journal.
pub fn run(_args: Args, config: &Config) -> Result<()> {
    let journal = Journal::new(config.paths());
    journal.initialize()?;

    println!("{}", "Your life has been initialized successfully!".cyan());
    Ok(())
}
