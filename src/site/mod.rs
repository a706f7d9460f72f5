//! Static viewer export for `life dir`.
//!
//! The viewer is a handful of static files compiled into the binary. An
//! export writes them into a fresh folder together with a copy of the
//! current `commits.json`, so the folder can be served as is.

use std::fs;
use std::path::Path;

use crate::error::JournalError;
use crate::journal::Journal;

/// Folder name used when `life dir` is given none.
pub const DEFAULT_SITE_DIR: &str = "website";

/// Files of the bundled viewer, as (relative path, contents).
const TEMPLATE: &[(&str, &str)] = &[
    ("index.html", include_str!("template/index.html")),
    ("app.js", include_str!("template/app.js")),
    ("style.css", include_str!("template/style.css")),
];

/// Writes the viewer and a snapshot of the journal into `target`.
///
/// `target` must not exist yet; an existing folder is never overwritten.
/// Any failure is reported as `ExportFailed` with the underlying error, and
/// the partly written folder is removed so the export can be retried.
pub fn export_site(journal: &Journal, target: &Path) -> Result<(), JournalError> {
    journal.ensure_initialized()?;

    if target.exists() {
        return Err(JournalError::ExportFailed(format!(
            "{} already exists",
            target.display()
        )));
    }

    if let Err(e) = write_site(journal, target) {
        if target.exists() {
            if let Err(cleanup) = fs::remove_dir_all(target) {
                tracing::warn!(path = %target.display(), error = %cleanup, "Could not remove partial export");
            }
        }
        return Err(JournalError::ExportFailed(e.to_string()));
    }
    tracing::debug!(path = %target.display(), "Exported website");
    Ok(())
}

fn write_site(journal: &Journal, target: &Path) -> std::io::Result<()> {
    fs::create_dir_all(target)?;

    for (name, contents) in TEMPLATE {
        fs::write(target.join(name), contents)?;
    }

    let store = journal.store().location();
    fs::copy(&store.path, target.join("commits.json"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoragePaths;
    use tempfile::tempdir;

    fn create_test_journal() -> (Journal, tempfile::TempDir) {
        let dir = tempdir().expect("Failed to create temp directory");
        let journal = Journal::new(StoragePaths::new(&dir.path().join(".life-commit")));
        (journal, dir)
    }

    #[test]
    fn test_export_writes_template_and_commits() {
        let (journal, dir) = create_test_journal();
        journal.initialize().unwrap();
        let target = dir.path().join(DEFAULT_SITE_DIR);

        export_site(&journal, &target).unwrap();

        for name in ["index.html", "app.js", "style.css"] {
            assert!(target.join(name).is_file(), "missing {name}");
        }
        let commits = fs::read_to_string(target.join("commits.json")).unwrap();
        assert_eq!(commits, "[]");
    }

    #[test]
    fn test_export_refuses_existing_target() {
        let (journal, dir) = create_test_journal();
        journal.initialize().unwrap();
        let target = dir.path().join("site");
        fs::create_dir(&target).unwrap();

        let err = export_site(&journal, &target).unwrap_err();
        assert!(matches!(err, JournalError::ExportFailed(msg) if msg.contains("already exists")));
    }

    #[test]
    fn test_export_requires_initialized_store() {
        let (journal, dir) = create_test_journal();

        let err = export_site(&journal, &dir.path().join("site")).unwrap_err();
        assert!(matches!(err, JournalError::NotInitialized));
        assert!(!dir.path().join("site").exists());
    }

    #[test]
    fn test_export_reports_io_failure() {
        let (journal, dir) = create_test_journal();
        journal.initialize().unwrap();
        // A regular file in the way of the parent directory.
        fs::write(dir.path().join("blocker"), "").unwrap();

        let err = export_site(&journal, &dir.path().join("blocker").join("site")).unwrap_err();
        assert!(matches!(err, JournalError::ExportFailed(_)));
    }

    #[test]
    fn test_export_failure_removes_partial_folder() {
        let (journal, dir) = create_test_journal();
        journal.initialize().unwrap();
        let store = journal.store().location().path;
        // The store still exists, but copying a directory fails.
        fs::remove_file(&store).unwrap();
        fs::create_dir(&store).unwrap();
        let target = dir.path().join(DEFAULT_SITE_DIR);

        let err = export_site(&journal, &target).unwrap_err();
        assert!(matches!(err, JournalError::ExportFailed(_)));
        assert!(!target.exists());

        fs::remove_dir(&store).unwrap();
        fs::write(&store, "[]").unwrap();
        export_site(&journal, &target).unwrap();
        assert!(target.join("commits.json").is_file());
    }
}
