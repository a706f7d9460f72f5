//! CLI commands for Life Commit.
//!
//! Each submodule implements a single CLI command with its argument
//! parsing and execution logic.

/// Record a new commit interactively.
pub mod commit;

/// Generate shell completion scripts.
pub mod completions;

/// Export the static viewer.
pub mod dir;

/// Edit or remove a commit.
pub mod edit;

/// Create the commit store.
pub mod init;

/// List or refresh the lifemoji vocabulary.
pub mod lifemojis;

/// List commits newest first.
pub mod log;

use life_commit::config::Config;
use life_commit::lifemoji::{HttpLifemojiSource, LifemojiCache};
use life_commit::storage::Lifemoji;
use life_commit::JournalError;

/// Loads the lifemoji vocabulary, downloading it on first use.
pub(crate) fn load_vocabulary(config: &Config) -> Result<Vec<Lifemoji>, JournalError> {
    let source = HttpLifemojiSource::new(&config.lifemoji_url)?;
    LifemojiCache::new(config.paths()).fetch(&source)
}
