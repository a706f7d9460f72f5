//! Command-line interface for Life Commit.
//!
//! Provides the CLI commands for recording, listing and editing journal
//! commits, plus the terminal prompter they share.

/// Individual CLI command implementations.
pub mod commands;

/// Output formatting shared by commands.
pub mod format;

/// Terminal prompter for interactive commands.
pub mod prompt;
