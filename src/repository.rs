//! Main repository interface
//!
//! [`Repository`] ties the state store, tracking set, snapshot manager,
//! checkout engine, and history reader into the user-level operations the
//! CLI exposes. One instance corresponds to one invocation: the tracked
//! set is loaded when the repository is opened, mutated in memory, and
//! persisted explicitly before the triggering operation's snapshot is
//! written. There is no shared global state.
//!
//! ## Example
//!
//! ```rust,no_run
//! use rewind::Repository;
//!
//! # fn main() -> rewind::Result<()> {
//! let mut repo = Repository::init(".")?;
//!
//! // Track a file; this creates version 1
//! repo.add("notes.txt", None)?;
//!
//! // Edit notes.txt, then capture the change as version 2
//! repo.commit("notes.txt", Some("rework the intro"))?;
//!
//! // Bring back the earlier content
//! repo.checkout(1)?;
//!
//! for entry in repo.history()? {
//!     println!("{}: {}", entry.version, entry.summary);
//! }
//! # Ok(())
//! # }
//! ```

use crate::checkout;
use crate::error::{Result, RewindError};
use crate::history;
use crate::snapshot;
use crate::state::StateStore;
use crate::tracking::TrackedSet;
use crate::types::{
    AddOutcome, CheckoutResult, CommitOutcome, DetachOutcome, HistoryEntry, RepositoryMetadata,
    VersionDetail, VersionId,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name of the control directory, rooted in the working directory
pub const CONTROL_DIR: &str = ".rewind";

/// A rewind repository: a working directory plus its control directory
#[derive(Debug)]
pub struct Repository {
    /// Directory whose files are tracked and restored
    working_dir: PathBuf,
    /// Persistent state records under the control directory
    store: StateStore,
    /// Tracked set, loaded once per invocation
    tracked: TrackedSet,
}

impl Repository {
    /// Initialize a new repository in `working_dir`
    ///
    /// Creates the control directory, empty state records, and version 0
    /// (empty tracked set, message `initialized`).
    ///
    /// # Errors
    ///
    /// [`RewindError::AlreadyInitialized`] if the control directory exists.
    pub fn init(working_dir: impl Into<PathBuf>) -> Result<Self> {
        let working_dir = working_dir.into();
        let store = StateStore::create(working_dir.join(CONTROL_DIR))?;

        store.write_latest_version(0)?;
        snapshot::populate_version_dir(&store, &working_dir, 0, "initialized", None)?;

        info!("Initialized repository in {:?}", working_dir);
        Ok(Self {
            working_dir,
            store,
            tracked: TrackedSet::new(),
        })
    }

    /// Open an existing repository in `working_dir`
    ///
    /// # Errors
    ///
    /// [`RewindError::NotInitialized`] if the control directory is missing.
    pub fn open(working_dir: impl Into<PathBuf>) -> Result<Self> {
        let working_dir = working_dir.into();
        let store = StateStore::open(working_dir.join(CONTROL_DIR))?;
        let tracked = store.read_tracked_set()?;

        debug!(
            "Opened repository in {:?} ({} tracked files)",
            working_dir,
            tracked.len()
        );
        Ok(Self {
            working_dir,
            store,
            tracked,
        })
    }

    /// Whether `working_dir` holds an initialized repository
    pub fn is_initialized(working_dir: &Path) -> bool {
        working_dir.join(CONTROL_DIR).exists()
    }

    /// Register `path` for tracking and snapshot the grown set
    ///
    /// The new version's message is `Added file: <path>`, with
    /// `user_message` as an optional further line.
    ///
    /// # Errors
    ///
    /// [`RewindError::FileNotFound`] if `path` does not exist in the
    /// working directory; this is checked before the tracked-set lookup, so
    /// a tracked path whose file is gone also reports `FileNotFound`.
    pub fn add(&mut self, path: impl AsRef<Path>, user_message: Option<&str>) -> Result<AddOutcome> {
        let path = path.as_ref();
        if !self.working_dir.join(path).exists() {
            return Err(RewindError::FileNotFound(path.to_path_buf()));
        }
        if !self.tracked.insert(path.to_path_buf()) {
            debug!("{:?} is already tracked", path);
            return Ok(AddOutcome::AlreadyTracked);
        }

        // The set strictly grew, so a single-entry append suffices
        self.store.append_tracked(path)?;
        let version = snapshot::create_snapshot(
            &self.store,
            &self.working_dir,
            &format!("Added file: {}", path.display()),
            user_message,
        )?;
        Ok(AddOutcome::Added { version })
    }

    /// Remove `path` from tracking and snapshot the reduced set
    ///
    /// Detaching is bookkeeping only: the path must be tracked, but the
    /// underlying file does not have to exist on disk. The new version's
    /// message is `Detached file: <path>`.
    pub fn detach(
        &mut self,
        path: impl AsRef<Path>,
        user_message: Option<&str>,
    ) -> Result<DetachOutcome> {
        let path = path.as_ref();
        if !self.tracked.remove(path) {
            debug!("{:?} is not tracked", path);
            return Ok(DetachOutcome::NotTracked);
        }

        self.store.write_tracked_set(&self.tracked)?;
        let version = snapshot::create_snapshot(
            &self.store,
            &self.working_dir,
            &format!("Detached file: {}", path.display()),
            user_message,
        )?;
        Ok(DetachOutcome::Detached { version })
    }

    /// Force a new snapshot for an already-tracked, existing file
    ///
    /// The tracked set does not change; the new version captures the
    /// current content of every tracked file, with message
    /// `Committed file: <path>`.
    ///
    /// # Errors
    ///
    /// [`RewindError::FileNotFound`] if `path` does not exist in the
    /// working directory.
    pub fn commit(
        &self,
        path: impl AsRef<Path>,
        user_message: Option<&str>,
    ) -> Result<CommitOutcome> {
        let path = path.as_ref();
        if !self.working_dir.join(path).exists() {
            return Err(RewindError::FileNotFound(path.to_path_buf()));
        }
        if !self.tracked.contains(path) {
            debug!("{:?} is not tracked", path);
            return Ok(CommitOutcome::NotTracked);
        }

        let version = snapshot::create_snapshot(
            &self.store,
            &self.working_dir,
            &format!("Committed file: {}", path.display()),
            user_message,
        )?;
        Ok(CommitOutcome::Committed { version })
    }

    /// Restore working-directory files from `version`'s snapshot
    pub fn checkout(&self, version: VersionId) -> Result<CheckoutResult> {
        checkout::checkout(&self.store, &self.working_dir, version)
    }

    /// All versions in ascending order with message summaries
    pub fn history(&self) -> Result<Vec<HistoryEntry>> {
        history::list(&self.store)
    }

    /// The final `n` versions in descending order
    pub fn history_last(&self, n: u64) -> Result<Vec<HistoryEntry>> {
        history::list_last(&self.store, n)
    }

    /// Full message of `version`, or of the latest version if `None`
    pub fn version_detail(&self, version: Option<VersionId>) -> Result<VersionDetail> {
        history::detail(&self.store, version)
    }

    /// The highest existing version number
    pub fn latest_version(&self) -> Result<VersionId> {
        self.store.read_latest_version()
    }

    /// Whether `path` is currently tracked
    pub fn is_tracked(&self, path: impl AsRef<Path>) -> bool {
        self.tracked.contains(path.as_ref())
    }

    /// Currently tracked paths in insertion order
    pub fn tracked_files(&self) -> &[PathBuf] {
        self.tracked.paths()
    }

    /// The working directory this repository operates on
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// The repository metadata record
    pub fn metadata(&self) -> Result<RepositoryMetadata> {
        self.store.read_metadata()
    }
}
