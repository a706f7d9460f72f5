//! Lifemoji vocabulary: remote download and local cache.
//!
//! The vocabulary is fetched once from a remote JSON resource and kept in
//! `lifemojis.json`. Once cached the file is authoritative; nothing expires
//! it. `life lifemojis --refresh` is the only way to download it again.
//!
//! # Submodules
//!
//! - `source` - the HTTP collaborator the cache downloads through

pub mod source;

use std::fs;

use crate::config::{ResolvedPath, StoragePaths};
use crate::error::JournalError;
use crate::storage::store::write_atomic;
use crate::storage::Lifemoji;

pub use source::{HttpLifemojiSource, LifemojiSource};

/// Read-through cache for the lifemoji vocabulary.
#[derive(Debug, Clone)]
pub struct LifemojiCache {
    paths: StoragePaths,
}

impl LifemojiCache {
    pub fn new(paths: StoragePaths) -> Self {
        Self { paths }
    }

    /// Location of the cache file and whether it exists right now.
    pub fn location(&self) -> ResolvedPath {
        self.paths.lifemojis()
    }

    /// Returns the cached vocabulary, downloading it on first use.
    ///
    /// A download failure is returned as `NetworkUnavailable` and leaves no
    /// cache file behind.
    pub fn fetch(&self, source: &dyn LifemojiSource) -> Result<Vec<Lifemoji>, JournalError> {
        let location = self.location();
        if location.exists {
            let raw = fs::read_to_string(&location.path)?;
            return serde_json::from_str(&raw).map_err(|source| JournalError::CorruptCache {
                path: location.path,
                source,
            });
        }

        self.download(source)
    }

    /// Downloads the vocabulary again and replaces the cache.
    pub fn refresh(&self, source: &dyn LifemojiSource) -> Result<Vec<Lifemoji>, JournalError> {
        self.download(source)
    }

    fn download(&self, source: &dyn LifemojiSource) -> Result<Vec<Lifemoji>, JournalError> {
        let raw = source.fetch_raw()?;

        // Validate before caching so a bad body never becomes authoritative.
        let lifemojis: Vec<Lifemoji> = serde_json::from_str(&raw).map_err(|e| {
            JournalError::NetworkUnavailable(format!("unexpected lifemoji response: {e}"))
        })?;

        let location = self.location();
        fs::create_dir_all(self.paths.base_dir())?;
        write_atomic(&location.path, raw.as_bytes())?;

        tracing::info!(count = lifemojis.len(), "Lifemojis updated successfully");
        Ok(lifemojis)
    }
}

/// Finds the vocabulary entry a user choice refers to.
///
/// A choice may be the emoji glyph itself or its code, with or without the
/// surrounding colons (`tada` and `:tada:` are the same code).
pub fn resolve<'a>(vocabulary: &'a [Lifemoji], choice: &str) -> Option<&'a Lifemoji> {
    let choice = choice.trim();
    if choice.is_empty() {
        return None;
    }

    let bare = choice.trim_matches(':');
    vocabulary
        .iter()
        .find(|l| l.emoji == choice || l.code == choice || l.code.trim_matches(':') == bare)
}
