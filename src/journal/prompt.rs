//! Interactive flows behind `life commit` and `life edit`.
//!
//! Asking the user for answers is a side effect the journal does not own:
//! it is injected as a [`CommitPrompter`], so the flows below run the same
//! against a terminal or a scripted test double.

use super::{CommitInput, EditAction, EditOutcome, Journal};
use crate::error::JournalError;
use crate::storage::{Commit, Lifemoji};

/// The user's answer to "what should happen to this commit?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditChoice {
    Edit,
    Remove,
}

/// Source of interactive answers.
pub trait CommitPrompter {
    /// Asks for the fields of a commit.
    ///
    /// `current` is set when editing; implementations may offer its values
    /// as defaults.
    fn prompt_commit(
        &mut self,
        vocabulary: &[Lifemoji],
        current: Option<&Commit>,
    ) -> Result<CommitInput, JournalError>;

    /// Asks whether the matched commit should be edited or removed.
    fn choose_edit_action(&mut self, commit: &Commit) -> Result<EditChoice, JournalError>;
}

/// Prompts for a new commit and records it.
///
/// The store is checked before anything is asked, so an uninitialized
/// journal fails without prompting.
pub fn record_interactive(
    journal: &Journal,
    prompter: &mut dyn CommitPrompter,
    vocabulary: &[Lifemoji],
) -> Result<Commit, JournalError> {
    journal.ensure_initialized()?;
    let input = prompter.prompt_commit(vocabulary, None)?;
    journal.add(input, vocabulary)
}

/// Resolves `fragment`, asks what to do with the match and applies it.
///
/// The vocabulary is only loaded when the user chooses to edit, so removing
/// a commit never needs the network.
pub fn edit_interactive<F>(
    journal: &Journal,
    prompter: &mut dyn CommitPrompter,
    fragment: Option<&str>,
    load_vocabulary: F,
) -> Result<EditOutcome, JournalError>
where
    F: FnOnce() -> Result<Vec<Lifemoji>, JournalError>,
{
    journal.ensure_initialized()?;
    let fragment = fragment.ok_or(JournalError::MissingArgument("commit id"))?;
    let commit = journal.get(fragment)?;

    match prompter.choose_edit_action(&commit)? {
        EditChoice::Remove => journal.edit(fragment, EditAction::Remove, &[]),
        EditChoice::Edit => {
            let vocabulary = load_vocabulary()?;
            let input = prompter.prompt_commit(&vocabulary, Some(&commit))?;
            journal.edit(fragment, EditAction::Update(input.into()), &vocabulary)
        }
    }
}
