use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use life_commit::config::Config;

mod cli;

use cli::commands;

/// The main CLI command line interface.
#[derive(Parser)]
#[command(name = "life")]
#[command(version)]
#[command(about = "Commit your life - a journal of dated, emoji-tagged commits")]
#[command(long_about = "Life Commit keeps a journal as a list of commits: each one has a\n\
    lifemoji, a title, a message and a date. Commits are stored in\n\
    ~/.life-commit/commits.json (override with LIFE_COMMIT_HOME).")]
#[command(after_help = "EXAMPLES:\n    \
    life init              Create your journal\n    \
    life commit            Record a new commit\n    \
    life log               List commits, newest first\n    \
    life edit 1a2b3c       Edit or remove a commit\n    \
    life dir               Export a static viewer to ./website\n\n\
    For more information about a command, run 'life <command> --help'.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Create the commit store
    Init(commands::init::Args),

    /// Record a new commit
    #[command(long_about = "Prompts for a lifemoji, a title, a message and a date, then\n\
        appends the commit to your journal. The lifemoji list is downloaded\n\
        on first use and cached in ~/.life-commit/lifemojis.json.")]
    Commit(commands::commit::Args),

    /// List commits, newest first
    Log(commands::log::Args),

    /// Edit or remove a commit
    Edit(commands::edit::Args),

    /// Export a static viewer of your commits
    #[command(long_about = "Creates FOLDER in the current directory with a static web page\n\
        and a copy of your commits. The folder must not exist yet.")]
    Dir(commands::dir::Args),

    /// List the available lifemojis
    Lifemojis(commands::lifemojis::Args),

    /// Generate shell completion scripts
    Completions(commands::completions::Args),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "life_commit=debug,life=debug"
    } else {
        "life_commit=info,life=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format!("ERROR: {err}").red());
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    if let Commands::Completions(args) = command {
        commands::completions::generate_completions(&mut Cli::command(), args.shell);
        return Ok(());
    }

    let config = Config::load()?;
    tracing::debug!(base_dir = %config.base_dir.display(), "Resolved configuration");

    match command {
        Commands::Init(args) => commands::init::run(args, &config),
        Commands::Commit(args) => commands::commit::run(args, &config),
        Commands::Log(args) => commands::log::run(args, &config),
        Commands::Edit(args) => commands::edit::run(args, &config),
        Commands::Dir(args) => commands::dir::run(args, &config),
        Commands::Lifemojis(args) => commands::lifemojis::run(args, &config),
        Commands::Completions(_) => Ok(()),
    }
}
