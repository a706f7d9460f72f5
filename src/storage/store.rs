//! JSON file storage for the commit collection

use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::models::Commit;
use crate::config::{ResolvedPath, StoragePaths};
use crate::error::JournalError;

/// Reads and writes `commits.json`.
///
/// The file holds a flat JSON array. Order on disk carries no meaning;
/// display order is recomputed from the commit dates.
#[derive(Debug, Clone)]
pub struct CommitStore {
    paths: StoragePaths,
}

impl CommitStore {
    pub fn new(paths: StoragePaths) -> Self {
        Self { paths }
    }

    /// Location of the store file and whether it exists right now.
    pub fn location(&self) -> ResolvedPath {
        self.paths.commits()
    }

    pub fn is_initialized(&self) -> bool {
        self.location().exists
    }

    /// Creates the store holding an empty list.
    ///
    /// Fails with `AlreadyInitialized` if the file is already there; an
    /// existing journal is never overwritten.
    pub fn initialize(&self) -> Result<(), JournalError> {
        let location = self.location();
        if location.exists {
            return Err(JournalError::AlreadyInitialized);
        }

        fs::create_dir_all(self.paths.base_dir())?;
        write_json_atomic(&location.path, &Vec::<Commit>::new())?;
        tracing::debug!(path = %location.path.display(), "Initialized commit store");
        Ok(())
    }

    /// Loads every commit in stored order.
    pub fn load(&self) -> Result<Vec<Commit>, JournalError> {
        let location = self.location();
        if !location.exists {
            return Err(JournalError::NotInitialized);
        }

        let raw = fs::read_to_string(&location.path)?;
        let commits: Vec<Commit> =
            serde_json::from_str(&raw).map_err(|source| JournalError::CorruptStore {
                path: location.path.clone(),
                source,
            })?;

        tracing::debug!(count = commits.len(), "Loaded commits");
        Ok(commits)
    }

    /// Replaces the stored collection with `commits`.
    pub fn save(&self, commits: &[Commit]) -> Result<(), JournalError> {
        let location = self.location();
        if let Some(parent) = location.path.parent() {
            fs::create_dir_all(parent)?;
        }

        write_json_atomic(&location.path, commits)?;
        tracing::debug!(count = commits.len(), "Saved commits");
        Ok(())
    }
}

/// Serializes `value` with single-space indentation and writes it atomically.
pub(crate) fn write_json_atomic<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> Result<(), JournalError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| JournalError::Io(e.into()))?;

    write_atomic(path, &buf)
}

/// Writes `contents` to a temp file beside `path`, then renames it over `path`.
///
/// The temp file is removed on drop if anything fails before the rename, so
/// an interrupted write leaves the previous file intact.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), JournalError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| JournalError::Io(e.error))?;
    Ok(())
}
