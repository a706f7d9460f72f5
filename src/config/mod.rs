//! Configuration and storage path resolution.
//!
//! Everything the journal touches lives under a single base directory,
//! `~/.life-commit` unless `LIFE_COMMIT_HOME` points elsewhere. The
//! resolved [`Config`] is built once in `main` and handed down; nothing
//! below the command layer reads the environment.

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Name of the directory created under the user's home.
pub const APP_DIR_NAME: &str = ".life-commit";

/// File holding the commit store.
pub const COMMITS_FILE: &str = "commits.json";

/// File holding the cached lifemoji vocabulary.
pub const LIFEMOJIS_FILE: &str = "lifemojis.json";

/// Host serving the lifemoji vocabulary.
pub const DEFAULT_LIFEMOJI_HOST: &str = "https://raw.githubusercontent.com/life-commit/life-commit/master";

/// Resource path of the vocabulary on [`DEFAULT_LIFEMOJI_HOST`].
pub const LIFEMOJI_RESOURCE: &str = "/src/data/lifemojis.json";

/// Environment variable overriding the base directory.
pub const HOME_ENV: &str = "LIFE_COMMIT_HOME";

/// Environment variable overriding the lifemoji endpoint.
pub const LIFEMOJI_URL_ENV: &str = "LIFE_COMMIT_LIFEMOJI_URL";

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory containing the store and the lifemoji cache
    pub base_dir: PathBuf,

    /// Full URL the lifemoji vocabulary is downloaded from
    pub lifemoji_url: String,
}

impl Config {
    /// Resolves configuration from the environment.
    ///
    /// `LIFE_COMMIT_HOME` replaces the whole base directory (it is not
    /// joined with `.life-commit`). `LIFE_COMMIT_LIFEMOJI_URL` replaces the
    /// download URL.
    pub fn load() -> Result<Self> {
        let base_dir = match env::var_os(HOME_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::home_dir()
                .context("Could not find home directory")?
                .join(APP_DIR_NAME),
        };

        let lifemoji_url = env::var(LIFEMOJI_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(default_lifemoji_url);

        Ok(Self {
            base_dir,
            lifemoji_url,
        })
    }

    /// Builds a configuration rooted at an explicit directory.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            lifemoji_url: default_lifemoji_url(),
        }
    }

    /// Returns the storage paths for this configuration.
    pub fn paths(&self) -> StoragePaths {
        StoragePaths::new(&self.base_dir)
    }
}

/// Default download URL for the lifemoji vocabulary.
pub fn default_lifemoji_url() -> String {
    format!("{DEFAULT_LIFEMOJI_HOST}{LIFEMOJI_RESOURCE}")
}

/// A resolved file location together with whether it currently exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub path: PathBuf,
    pub exists: bool,
}

impl ResolvedPath {
    fn probe(path: PathBuf) -> Self {
        let exists = path.exists();
        Self { path, exists }
    }
}

/// The two files kept under the base directory.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    base_dir: PathBuf,
}

impl StoragePaths {
    pub fn new(base_dir: &Path) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Location of `commits.json`.
    pub fn commits(&self) -> ResolvedPath {
        ResolvedPath::probe(self.base_dir.join(COMMITS_FILE))
    }

    /// Location of `lifemojis.json`.
    pub fn lifemojis(&self) -> ResolvedPath {
        ResolvedPath::probe(self.base_dir.join(LIFEMOJIS_FILE))
    }
}
