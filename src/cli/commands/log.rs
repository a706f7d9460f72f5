//! Log command - list commits newest first.

use anyhow::Result;
use colored::Colorize;

use life_commit::config::Config;
use life_commit::journal::{CommitSummary, Journal};

use crate::cli::format::{summary_line, OutputFormat};

/// Arguments for the log command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    life log                   List commits, newest first\n    \
    life log --format json     Print the sorted commits as JSON")]
pub struct Args {
    /// Output format: text (default) or json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Executes the log command.
pub fn run(args: Args, config: &Config) -> Result<()> {
    let journal = Journal::new(config.paths());
    let commits = journal.sorted()?;

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&commits)?);
        }
        OutputFormat::Text => {
            if commits.is_empty() {
                println!("{}", "No commits yet. Run 'life commit' to add one.".dimmed());
                return Ok(());
            }
            for commit in &commits {
                println!("{}", summary_line(&CommitSummary::from(commit)));
            }
        }
    }

    Ok(())
}
