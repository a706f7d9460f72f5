//! Output formatting utilities for CLI commands.
//!
//! Provides the `OutputFormat` switch for `life log` and the colored
//! rendering of a commit summary line shared by `log` and `edit`.

use clap::ValueEnum;
use colored::Colorize;

use life_commit::journal::CommitSummary;
use life_commit::storage::Lifemoji;

/// Output format options for CLI commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default).
    #[default]
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// `* <id> - <lifemoji>  <title> <date>` with the id red, title blue and
/// date green.
pub fn summary_line(summary: &CommitSummary) -> String {
    format!(
        "* {} - {}  {} {}",
        summary.short_id.red(),
        summary.lifemoji,
        summary.title.blue(),
        summary.date.green()
    )
}

/// `<emoji> - <code> - <description>` with the code blue.
pub fn lifemoji_line(lifemoji: &Lifemoji) -> String {
    format!(
        "{} - {} - {}",
        lifemoji.emoji,
        lifemoji.code.blue(),
        lifemoji.description
    )
}
