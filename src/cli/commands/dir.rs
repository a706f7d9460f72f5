//! Dir command - export the static commit viewer.

use anyhow::{Context, Result};
use colored::Colorize;
use std::env;

use life_commit::config::Config;
use life_commit::journal::Journal;
use life_commit::site::{export_site, DEFAULT_SITE_DIR};

/// Arguments for the dir command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    life dir               Export the viewer to ./website\n    \
    life dir my-life       Export the viewer to ./my-life")]
pub struct Args {
    /// Folder to create in the current directory
    #[arg(value_name = "FOLDER", default_value = DEFAULT_SITE_DIR)]
    pub folder: String,
}

/// Executes the dir command.
pub fn run(args: Args, config: &Config) -> Result<()> {
    let journal = Journal::new(config.paths());
    let target = env::current_dir()
        .context("Could not determine the current directory")?
        .join(&args.folder);

    export_site(&journal, &target)?;

    println!(
        "{} {}",
        "Successfully create folder at:".green(),
        target.display().to_string().green()
    );
    println!();
    println!(
        "{}",
        "Serve the folder to visualize your commits, for example:".cyan()
    );
    println!("$ cd {}", args.folder);
    println!("$ python3 -m http.server");
    Ok(())
}
