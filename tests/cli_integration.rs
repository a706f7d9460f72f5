//! Integration tests for Life Commit
//!
//! The first group drives the library API against temporary directories.
//! The second runs the `life` binary with `LIFE_COMMIT_HOME` pointing at a
//! temporary directory so the real home is never touched.

use assert_cmd::Command;
use life_commit::config::{Config, StoragePaths};
use life_commit::journal::{CommitInput, CommitPatch, EditAction, Journal};
use life_commit::lifemoji::{LifemojiCache, LifemojiSource};
use life_commit::storage::{Commit, Lifemoji};
use life_commit::JournalError;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// =============================================================================
// Test Helpers
// =============================================================================

const VOCABULARY: &str = r#"[
 {"emoji": "😀", "code": ":grinning:", "description": "A happy day"},
 {"emoji": "🎓", "code": ":graduation:", "description": "Learned something"}
]"#;

/// Unreachable endpoint; nothing listens on the discard port.
const OFFLINE_URL: &str = "http://127.0.0.1:9/src/data/lifemojis.json";

/// Creates an initialized journal in a temporary directory.
/// Returns the Journal and the temp directory (which must be kept alive).
fn create_test_journal() -> (Journal, tempfile::TempDir) {
    let dir = tempdir().expect("Failed to create temp directory");
    let config = Config::with_base_dir(dir.path().join(".life-commit"));
    let journal = Journal::new(config.paths());
    journal.initialize().expect("Failed to initialize journal");
    (journal, dir)
}

fn vocabulary() -> Vec<Lifemoji> {
    serde_json::from_str(VOCABULARY).expect("Failed to parse vocabulary")
}

fn create_test_input(title: &str, date: &str) -> CommitInput {
    CommitInput {
        lifemoji: "😀".to_string(),
        title: title.to_string(),
        message: "hi".to_string(),
        date: date.to_string(),
    }
}

/// A `life` invocation isolated in `home`, without colors.
fn life(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("life").expect("Failed to find life binary");
    cmd.env("LIFE_COMMIT_HOME", home)
        .env("LIFE_COMMIT_LIFEMOJI_URL", OFFLINE_URL)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// Source that always fails, standing in for a machine with no network.
struct OfflineSource;

impl LifemojiSource for OfflineSource {
    fn fetch_raw(&self) -> Result<String, JournalError> {
        Err(JournalError::NetworkUnavailable("no route to host".to_string()))
    }
}

// =============================================================================
// Library Scenarios
// =============================================================================

mod journal_tests {
    use super::*;

    #[test]
    fn test_add_then_list_shows_summary() {
        let (journal, _dir) = create_test_journal();

        let commit = journal
            .add(create_test_input("Day one", "2024-01-01"), &vocabulary())
            .expect("Failed to add commit");
        let lines: Vec<String> = journal
            .list()
            .expect("Failed to list")
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        assert!(line.contains(&commit.id[..6]));
        assert!(line.contains("😀"));
        assert!(line.contains("Day one"));
        assert!(line.contains("2024/1/1"));
    }

    #[test]
    fn test_add_increments_length_with_unique_ids() {
        let (journal, _dir) = create_test_journal();
        let vocab = vocabulary();

        for day in 1..=5 {
            let before = journal.store().load().unwrap().len();
            journal
                .add(create_test_input("day", &format!("2024-01-0{day}")), &vocab)
                .unwrap();
            assert_eq!(journal.store().load().unwrap().len(), before + 1);
        }

        let mut ids: Vec<String> = journal
            .store()
            .load()
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_list_strictly_descending_for_distinct_dates() {
        let (journal, _dir) = create_test_journal();
        let vocab = vocabulary();
        for date in ["2022-03-01", "2024-07-15", "2023-01-20", "2024-07-14 23:00"] {
            journal.add(create_test_input(date, date), &vocab).unwrap();
        }

        let sorted = journal.sorted().unwrap();
        let stamps: Vec<_> = sorted.iter().map(|c| c.timestamp().unwrap()).collect();
        assert!(stamps.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_edit_remove_then_id_gone() {
        let (journal, _dir) = create_test_journal();
        let vocab = vocabulary();
        let keep = journal.add(create_test_input("keep", "2024-01-01"), &vocab).unwrap();
        let gone = journal.add(create_test_input("drop", "2024-01-02"), &vocab).unwrap();

        journal.edit(&gone.id, EditAction::Remove, &vocab).unwrap();

        let commits = journal.store().load().unwrap();
        assert_eq!(commits, vec![keep]);
    }

    #[test]
    fn test_edit_patch_keeps_id_and_untouched_fields() {
        let (journal, _dir) = create_test_journal();
        let vocab = vocabulary();
        let original = journal.add(create_test_input("before", "2024-01-01"), &vocab).unwrap();

        let patch = CommitPatch {
            message: Some("rewritten".to_string()),
            date: Some("2024-02-02".to_string()),
            ..Default::default()
        };
        journal
            .edit(original.short_id(), EditAction::Update(patch), &vocab)
            .unwrap();

        let stored = journal.get(&original.id).unwrap();
        assert_eq!(
            stored,
            Commit {
                message: "rewritten".to_string(),
                date: "2024-02-02".to_string(),
                ..original
            }
        );
    }

    #[test]
    fn test_lifemoji_fetch_offline_leaves_no_cache() {
        let dir = tempdir().unwrap();
        let cache = LifemojiCache::new(StoragePaths::new(dir.path()));

        let err = cache.fetch(&OfflineSource).unwrap_err();

        assert!(matches!(err, JournalError::NetworkUnavailable(_)));
        assert!(!dir.path().join("lifemojis.json").exists());
    }

    #[test]
    fn test_lifemoji_cache_is_authoritative_offline() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("lifemojis.json"), VOCABULARY).unwrap();
        let cache = LifemojiCache::new(StoragePaths::new(dir.path()));

        let lifemojis = cache.fetch(&OfflineSource).unwrap();
        assert_eq!(lifemojis, vocabulary());
    }
}

// =============================================================================
// Binary Tests
// =============================================================================

mod binary_tests {
    use super::*;

    #[test]
    fn test_init_creates_store() {
        let dir = tempdir().unwrap();
        let home = dir.path().join("journal");

        life(&home)
            .arg("init")
            .assert()
            .success()
            .stdout(predicate::str::contains("initialized successfully"));

        let raw = fs::read_to_string(home.join("commits.json")).unwrap();
        assert_eq!(raw, "[]");
    }

    #[test]
    fn test_init_twice_fails_with_nonzero_exit() {
        let dir = tempdir().unwrap();

        life(dir.path()).arg("init").assert().success();
        life(dir.path())
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("ERROR:"))
            .stderr(predicate::str::contains("had been initialized"));
    }

    #[test]
    fn test_log_requires_init() {
        let dir = tempdir().unwrap();

        life(dir.path())
            .arg("log")
            .assert()
            .failure()
            .stderr(predicate::str::contains("initialize your life first"));
    }

    #[test]
    fn test_log_lists_newest_first() {
        let (journal, dir) = create_test_journal();
        let vocab = vocabulary();
        let old = journal.add(create_test_input("Older", "2020-05-05"), &vocab).unwrap();
        let new = journal.add(create_test_input("Newer", "2021-06-06"), &vocab).unwrap();

        let output = life(&dir.path().join(".life-commit"))
            .arg("log")
            .output()
            .expect("Failed to run life log");
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout).unwrap();
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(
            lines,
            vec![
                format!("* {} - 😀  Newer 2021/6/6", new.short_id()),
                format!("* {} - 😀  Older 2020/5/5", old.short_id()),
            ]
        );
    }

    #[test]
    fn test_log_json_format() {
        let (journal, dir) = create_test_journal();
        let commit = journal
            .add(create_test_input("Json", "2024-01-01"), &vocabulary())
            .unwrap();

        let output = life(&dir.path().join(".life-commit"))
            .args(["log", "--format", "json"])
            .output()
            .expect("Failed to run life log");

        let parsed: Vec<Commit> = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(parsed, vec![commit]);
    }

    #[test]
    fn test_edit_without_id_fails() {
        let dir = tempdir().unwrap();
        life(dir.path()).arg("init").assert().success();

        life(dir.path())
            .arg("edit")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Please specify the commit id."));
    }

    #[test]
    fn test_edit_unknown_id_fails() {
        let dir = tempdir().unwrap();
        life(dir.path()).arg("init").assert().success();

        life(dir.path())
            .args(["edit", "does-not-exist"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Commit id does not exist"));
    }

    #[test]
    fn test_edit_remove_via_stdin() {
        let (journal, dir) = create_test_journal();
        let commit = journal
            .add(create_test_input("Bye", "2024-01-01"), &vocabulary())
            .unwrap();

        life(&dir.path().join(".life-commit"))
            .args(["edit", commit.short_id()])
            .write_stdin("r\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("1 commit removed"));

        assert!(journal.store().load().unwrap().is_empty());
    }

    #[test]
    fn test_commit_via_stdin_with_cached_lifemojis() {
        let dir = tempdir().unwrap();
        life(dir.path()).arg("init").assert().success();
        fs::write(dir.path().join("lifemojis.json"), VOCABULARY).unwrap();

        life(dir.path())
            .arg("commit")
            .write_stdin(":graduation:\nFinished school\nFinally\n2024-06-30\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("1 commit added"));

        let journal = Journal::new(StoragePaths::new(dir.path()));
        let commits = journal.store().load().unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].lifemoji, "🎓");
        assert_eq!(commits[0].title, "Finished school");
        assert_eq!(commits[0].date, "2024-06-30");
    }

    #[test]
    fn test_commit_offline_without_cache_fails() {
        let dir = tempdir().unwrap();
        life(dir.path()).arg("init").assert().success();

        life(dir.path())
            .arg("commit")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Network connection not found"));

        assert!(!dir.path().join("lifemojis.json").exists());
    }

    #[test]
    fn test_lifemojis_lists_cache() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("lifemojis.json"), VOCABULARY).unwrap();

        life(dir.path())
            .arg("lifemojis")
            .assert()
            .success()
            .stdout(predicate::str::contains("🎓 - :graduation: - Learned something"));
    }

    #[test]
    fn test_dir_exports_site() {
        let dir = tempdir().unwrap();
        let home = dir.path().join("home");
        let workdir = dir.path().join("work");
        fs::create_dir(&workdir).unwrap();
        life(&home).arg("init").assert().success();

        life(&home)
            .current_dir(&workdir)
            .args(["dir", "my-life"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Successfully create folder at:"));

        assert!(workdir.join("my-life").join("index.html").is_file());
        assert_eq!(
            fs::read_to_string(workdir.join("my-life").join("commits.json")).unwrap(),
            "[]"
        );

        life(&home)
            .current_dir(&workdir)
            .args(["dir", "my-life"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }
}
