//! Commit operations over the journal store.
//!
//! A [`Journal`] wraps the [`CommitStore`] and implements the user-facing
//! operations: recording a commit, listing newest first, looking a commit
//! up by a fragment of its id, and editing or removing it. Every mutating
//! operation loads the whole collection, changes it in memory and saves it
//! back.
//!
//! Interactive flows live in [`prompt`], which drives these operations
//! through an injected [`CommitPrompter`].

pub mod prompt;

use std::cmp::Ordering;
use std::fmt;

use uuid::Uuid;

use crate::config::StoragePaths;
use crate::error::JournalError;
use crate::lifemoji;
use crate::storage::{parse_commit_date, Commit, CommitStore, Lifemoji};

pub use prompt::{edit_interactive, record_interactive, CommitPrompter, EditChoice};

/// Fields supplied for a new commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInput {
    /// Emoji glyph or code from the vocabulary
    pub lifemoji: String,
    pub title: String,
    pub message: String,
    pub date: String,
}

/// Replacement values for an existing commit. `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitPatch {
    pub lifemoji: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub date: Option<String>,
}

impl From<CommitInput> for CommitPatch {
    fn from(input: CommitInput) -> Self {
        Self {
            lifemoji: Some(input.lifemoji),
            title: Some(input.title),
            message: Some(input.message),
            date: Some(input.date),
        }
    }
}

/// What to do with the commit matched by [`Journal::edit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    Remove,
    Update(CommitPatch),
}

/// Result of an edit; each call affects exactly one commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The commit as it was before removal
    Removed(Commit),
    /// The commit after the patch was applied
    Edited(Commit),
}

impl EditOutcome {
    pub fn count(&self) -> usize {
        1
    }

    pub fn commit(&self) -> &Commit {
        match self {
            EditOutcome::Removed(c) | EditOutcome::Edited(c) => c,
        }
    }
}

/// One line of `life log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    pub short_id: String,
    pub lifemoji: String,
    pub title: String,
    /// Date in `yyyy/M/d` form
    pub date: String,
}

impl From<&Commit> for CommitSummary {
    fn from(commit: &Commit) -> Self {
        Self {
            short_id: commit.short_id().to_string(),
            lifemoji: commit.lifemoji.clone(),
            title: commit.title.clone(),
            date: commit.display_date(),
        }
    }
}

impl fmt::Display for CommitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "* {} - {}  {} {}",
            self.short_id, self.lifemoji, self.title, self.date
        )
    }
}

/// The user's journal.
#[derive(Debug, Clone)]
pub struct Journal {
    store: CommitStore,
}

impl Journal {
    pub fn new(paths: StoragePaths) -> Self {
        Self {
            store: CommitStore::new(paths),
        }
    }

    pub fn store(&self) -> &CommitStore {
        &self.store
    }

    /// Creates an empty store. Fails if one already exists.
    pub fn initialize(&self) -> Result<(), JournalError> {
        self.store.initialize()
    }

    /// Fails with `NotInitialized` unless the store exists.
    pub fn ensure_initialized(&self) -> Result<(), JournalError> {
        if self.store.is_initialized() {
            Ok(())
        } else {
            Err(JournalError::NotInitialized)
        }
    }

    /// Records a new commit and returns it.
    ///
    /// The lifemoji must name an entry of `vocabulary` (its glyph is what
    /// gets stored) and the date must parse. The id is a fresh v4 UUID.
    pub fn add(
        &self,
        input: CommitInput,
        vocabulary: &[Lifemoji],
    ) -> Result<Commit, JournalError> {
        let mut commits = self.store.load()?;

        let lifemoji = validate_lifemoji(vocabulary, &input.lifemoji)?;
        let date = validate_date(&input.date)?;

        let mut id = Uuid::new_v4().to_string();
        while commits.iter().any(|c| c.id == id) {
            id = Uuid::new_v4().to_string();
        }

        let commit = Commit {
            id,
            lifemoji,
            title: input.title,
            message: input.message,
            date,
        };
        commits.push(commit.clone());
        self.store.save(&commits)?;

        tracing::debug!(id = %commit.id, "Added commit");
        Ok(commit)
    }

    /// All commits, newest first.
    ///
    /// The sort is stable: commits with equal dates keep their stored
    /// order. Commits whose date does not parse come last.
    pub fn sorted(&self) -> Result<Vec<Commit>, JournalError> {
        let mut commits = self.store.load()?;
        sort_newest_first(&mut commits);
        Ok(commits)
    }

    /// One summary line per commit, newest first.
    pub fn list(&self) -> Result<Vec<CommitSummary>, JournalError> {
        Ok(self.sorted()?.iter().map(CommitSummary::from).collect())
    }

    /// Returns the first stored commit whose id contains `fragment`.
    pub fn get(&self, fragment: &str) -> Result<Commit, JournalError> {
        let commits = self.store.load()?;
        let index = find_by_id_prefix(&commits, fragment)?;
        Ok(commits[index].clone())
    }

    /// Removes or patches the first commit whose id contains `fragment`.
    ///
    /// Patches replace only the fields they carry; the id never changes.
    /// The collection is saved afterwards either way.
    pub fn edit(
        &self,
        fragment: &str,
        action: EditAction,
        vocabulary: &[Lifemoji],
    ) -> Result<EditOutcome, JournalError> {
        let mut commits = self.store.load()?;
        let index = find_by_id_prefix(&commits, fragment)?;

        let outcome = match action {
            EditAction::Remove => EditOutcome::Removed(commits.remove(index)),
            EditAction::Update(patch) => {
                let commit = &mut commits[index];
                apply_patch(commit, patch, vocabulary)?;
                EditOutcome::Edited(commit.clone())
            }
        };

        self.store.save(&commits)?;
        tracing::debug!(id = %outcome.commit().id, "Edited commit");
        Ok(outcome)
    }
}

/// Index of the first commit whose id contains `fragment` anywhere.
///
/// This is a substring match, not a strict prefix match: `"45"` finds an
/// id `"123456"`. The empty fragment matches the first commit. When several
/// commits match, the first in stored order wins.
pub fn find_by_id_prefix(commits: &[Commit], fragment: &str) -> Result<usize, JournalError> {
    commits
        .iter()
        .position(|c| c.id.contains(fragment))
        .ok_or_else(|| JournalError::CommitNotFound(fragment.to_string()))
}

/// Sorts by date descending, keeping stored order for equal dates.
pub fn sort_newest_first(commits: &mut [Commit]) {
    commits.sort_by(|a, b| match (a.timestamp(), b.timestamp()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

fn apply_patch(
    commit: &mut Commit,
    patch: CommitPatch,
    vocabulary: &[Lifemoji],
) -> Result<(), JournalError> {
    // Validate everything before touching the record.
    let lifemoji = patch
        .lifemoji
        .map(|l| validate_lifemoji(vocabulary, &l))
        .transpose()?;
    let date = patch.date.map(|d| validate_date(&d)).transpose()?;

    if let Some(lifemoji) = lifemoji {
        commit.lifemoji = lifemoji;
    }
    if let Some(title) = patch.title {
        commit.title = title;
    }
    if let Some(message) = patch.message {
        commit.message = message;
    }
    if let Some(date) = date {
        commit.date = date;
    }
    Ok(())
}

fn validate_lifemoji(vocabulary: &[Lifemoji], choice: &str) -> Result<String, JournalError> {
    lifemoji::resolve(vocabulary, choice)
        .map(|l| l.emoji.clone())
        .ok_or_else(|| JournalError::UnknownLifemoji(choice.to_string()))
}

fn validate_date(date: &str) -> Result<String, JournalError> {
    let date = date.trim();
    match parse_commit_date(date) {
        Some(_) => Ok(date.to_string()),
        None => Err(JournalError::InvalidDate(date.to_string())),
    }
}
