//! Comprehensive integration tests for rewind
//!
//! Tests full multi-version workflows: long add/commit/detach sequences,
//! interleaved checkouts, and reopening repositories across invocations.

use ::rewind::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test harness for multi-version scenarios
pub struct RepoHarness {
    pub dir: TempDir,
    pub repo: Repository,
    pub operation_log: Vec<TestOperation>,
}

#[derive(Debug, Clone)]
pub enum TestOperation {
    WriteFile { path: PathBuf, content: String },
    Add { path: PathBuf },
}

impl RepoHarness {
    /// Create a fresh initialized repository in a temp dir
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        Self {
            dir,
            repo,
            operation_log: Vec::new(),
        }
    }

    /// Write a file into the working directory
    pub fn write_file(&mut self, path: &str, content: &str) -> anyhow::Result<()> {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full, content)?;
        self.operation_log.push(TestOperation::WriteFile {
            path: PathBuf::from(path),
            content: content.to_string(),
        });
        Ok(())
    }

    /// Track a file and record the operation
    pub fn add(&mut self, path: &str) -> anyhow::Result<AddOutcome> {
        let outcome = self.repo.add(path, None)?;
        self.operation_log.push(TestOperation::Add {
            path: PathBuf::from(path),
        });
        Ok(outcome)
    }

    /// Read a working-directory file
    pub fn read_file(&self, path: &str) -> anyhow::Result<String> {
        Ok(fs::read_to_string(self.dir.path().join(path))?)
    }

    /// Reopen the repository, as a new invocation would
    pub fn reopen(&mut self) {
        self.repo = Repository::open(self.dir.path()).unwrap();
    }
}

#[test]
fn test_multi_version_edit_history() {
    let mut h = RepoHarness::new();

    h.write_file("story.txt", "draft 1").unwrap();
    h.add("story.txt").unwrap(); // version 1 captures "draft 1"

    for (i, text) in ["draft 2", "draft 3", "draft 4"].iter().enumerate() {
        h.write_file("story.txt", text).unwrap();
        let outcome = h.repo.commit("story.txt", None).unwrap();
        assert_eq!(
            outcome,
            CommitOutcome::Committed {
                version: (i + 2) as VersionId
            }
        );
    }

    // Every version holds the content that was current when it was created
    for (version, expected) in [(1, "draft 1"), (2, "draft 2"), (3, "draft 3"), (4, "draft 4")] {
        h.repo.checkout(version).unwrap();
        assert_eq!(h.read_file("story.txt").unwrap(), expected);
    }

    // Jumping backwards then forwards again works too
    h.repo.checkout(1).unwrap();
    h.repo.checkout(4).unwrap();
    assert_eq!(h.read_file("story.txt").unwrap(), "draft 4");
}

#[test]
fn test_detached_file_is_absent_from_later_snapshots() {
    let mut h = RepoHarness::new();

    h.write_file("keep.txt", "keep").unwrap();
    h.write_file("drop.txt", "drop").unwrap();
    h.add("keep.txt").unwrap(); // version 1
    h.add("drop.txt").unwrap(); // version 2
    h.repo.detach("drop.txt", None).unwrap(); // version 3

    // Version 3's snapshot no longer records drop.txt, so checking it out
    // after local edits only restores keep.txt
    h.write_file("keep.txt", "edited").unwrap();
    h.write_file("drop.txt", "edited").unwrap();
    let result = h.repo.checkout(3).unwrap();

    assert_eq!(result.files_restored, 1);
    assert_eq!(h.read_file("keep.txt").unwrap(), "keep");
    assert_eq!(h.read_file("drop.txt").unwrap(), "edited");

    // But version 2 still has the old copy
    h.repo.checkout(2).unwrap();
    assert_eq!(h.read_file("drop.txt").unwrap(), "drop");
}

#[test]
fn test_state_survives_many_reopens() {
    let mut h = RepoHarness::new();

    for i in 0..10 {
        let name = format!("file_{}.txt", i);
        h.write_file(&name, &format!("content {}", i)).unwrap();
        h.add(&name).unwrap();
        h.reopen();
    }

    assert_eq!(h.repo.latest_version().unwrap(), 10);
    assert_eq!(h.repo.tracked_files().len(), 10);

    let history = h.repo.history().unwrap();
    assert_eq!(history.len(), 11);
    for (i, entry) in history.iter().enumerate() {
        assert_eq!(entry.version, i as VersionId);
    }
}

#[test]
fn test_readd_after_detach_restarts_tracking() {
    let mut h = RepoHarness::new();

    h.write_file("a.txt", "first life").unwrap();
    h.add("a.txt").unwrap(); // version 1
    h.repo.detach("a.txt", None).unwrap(); // version 2

    h.write_file("a.txt", "second life").unwrap();
    let outcome = h.add("a.txt").unwrap(); // version 3
    assert_eq!(outcome, AddOutcome::Added { version: 3 });

    // The re-added path sits at the end of the tracked set
    assert_eq!(h.repo.tracked_files(), &[PathBuf::from("a.txt")]);
    h.repo.checkout(3).unwrap();
    assert_eq!(h.read_file("a.txt").unwrap(), "second life");
}

#[test]
fn test_checkout_latest_then_commit_changes_nothing() {
    let mut h = RepoHarness::new();

    h.write_file("a.txt", "alpha").unwrap();
    h.write_file("b.txt", "beta").unwrap();
    h.add("a.txt").unwrap();
    h.add("b.txt").unwrap();

    let latest = h.repo.latest_version().unwrap();
    h.repo.checkout(latest).unwrap();
    h.repo.commit("a.txt", None).unwrap();

    let control = h.dir.path().join(CONTROL_DIR);
    for name in ["a.txt", "b.txt"] {
        let before = fs::read(control.join(latest.to_string()).join(name)).unwrap();
        let after = fs::read(control.join((latest + 1).to_string()).join(name)).unwrap();
        assert_eq!(before, after);
    }
}
