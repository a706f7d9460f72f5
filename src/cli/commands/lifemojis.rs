//! Lifemojis command - show the lifemoji vocabulary.
//!
//! The vocabulary is downloaded on first use and cached. `--refresh`
//! downloads it again; nothing else ever expires the cache.

use anyhow::Result;

use life_commit::config::Config;
use life_commit::lifemoji::{HttpLifemojiSource, LifemojiCache};

use crate::cli::format::lifemoji_line;

/// Arguments for the lifemojis command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    life lifemojis             List the available lifemojis\n    \
    life lifemojis --refresh   Download the list again")]
pub struct Args {
    /// Download the vocabulary again instead of using the cache
    #[arg(long)]
    pub refresh: bool,
}

/// Executes the lifemojis command.
pub fn run(args: Args, config: &Config) -> Result<()> {
    let source = HttpLifemojiSource::new(&config.lifemoji_url)?;
    let cache = LifemojiCache::new(config.paths());

    let lifemojis = if args.refresh {
        cache.refresh(&source)?
    } else {
        cache.fetch(&source)?
    };

    for lifemoji in &lifemojis {
        println!("{}", lifemoji_line(lifemoji));
    }
    Ok(())
}
