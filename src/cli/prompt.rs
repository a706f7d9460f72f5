//! Terminal implementation of the commit prompter.
//!
//! Reads answers line by line. When editing, pressing Enter keeps the
//! value currently stored.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use chrono::Local;
use colored::Colorize;

use life_commit::journal::{CommitInput, CommitPrompter, CommitSummary, EditChoice};
use life_commit::lifemoji;
use life_commit::storage::{parse_commit_date, Commit, Lifemoji};
use life_commit::JournalError;

use super::format::{lifemoji_line, summary_line};

/// Asks questions on `output` and reads answers from `input`.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `question`, reads one line and returns it trimmed.
    ///
    /// An empty answer yields `default` when one is given.
    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String, JournalError> {
        match default {
            Some(d) if !d.is_empty() => {
                write!(self.output, "{} {} ({}) ", "?".green(), question.bold(), d.dimmed())?
            }
            _ => write!(self.output, "{} {} ", "?".green(), question.bold())?,
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(JournalError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the answer was given",
            )));
        }

        let answer = line.trim();
        match default {
            Some(d) if answer.is_empty() => Ok(d.to_string()),
            _ => Ok(answer.to_string()),
        }
    }

    /// Asks until `accept` approves the answer.
    fn ask_until<F>(
        &mut self,
        question: &str,
        default: Option<&str>,
        complaint: &str,
        accept: F,
    ) -> Result<String, JournalError>
    where
        F: Fn(&str) -> bool,
    {
        loop {
            let answer = self.ask(question, default)?;
            if accept(&answer) {
                return Ok(answer);
            }
            writeln!(self.output, "{}", complaint.yellow())?;
        }
    }
}

impl<R: BufRead, W: Write> CommitPrompter for TerminalPrompter<R, W> {
    fn prompt_commit(
        &mut self,
        vocabulary: &[Lifemoji],
        current: Option<&Commit>,
    ) -> Result<CommitInput, JournalError> {
        for entry in vocabulary {
            writeln!(self.output, "{}", lifemoji_line(entry))?;
        }

        let lifemoji = self.ask_until(
            "Choose a lifemoji (emoji or code):",
            current.map(|c| c.lifemoji.as_str()),
            "That lifemoji is not in the list.",
            |answer| lifemoji::resolve(vocabulary, answer).is_some(),
        )?;

        let title = self.ask_until(
            "Enter the commit title:",
            current.map(|c| c.title.as_str()),
            "The title cannot be empty.",
            |answer| !answer.is_empty(),
        )?;

        let message = self.ask("Enter the commit message:", current.map(|c| c.message.as_str()))?;

        let today = Local::now().format("%Y-%m-%d").to_string();
        let date_default = current.map(|c| c.date.as_str()).unwrap_or(&today).to_string();
        let date = self.ask_until(
            "When did it happen? (YYYY-MM-DD [HH:MM]):",
            Some(date_default.as_str()),
            "That is not a valid date.",
            |answer| parse_commit_date(answer).is_some(),
        )?;

        Ok(CommitInput {
            lifemoji,
            title,
            message,
            date,
        })
    }

    fn choose_edit_action(&mut self, commit: &Commit) -> Result<EditChoice, JournalError> {
        writeln!(self.output, "{}", summary_line(&CommitSummary::from(commit)))?;

        loop {
            let answer = self.ask("Edit or remove this commit? [e/r]", None)?;
            match answer.to_lowercase().as_str() {
                "e" | "edit" => return Ok(EditChoice::Edit),
                "r" | "remove" => return Ok(EditChoice::Remove),
                _ => writeln!(self.output, "{}", "Please answer 'e' or 'r'.".yellow())?,
            }
        }
    }
}
