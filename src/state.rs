//! Durable repository state records
//!
//! This module owns the control directory and the records persisted inside
//! it. The layout is deliberately plain text so a user can inspect a
//! repository with `cat`:
//!
//! ```text
//! .rewind/
//! ├── metadata.json        # format + tool version, creation time
//! ├── latestVersion.txt    # single integer, decimal text
//! ├── addedFiles.txt       # newline-separated relative paths
//! └── <version>/           # one immutable directory per snapshot
//!     ├── message.txt      # commit message, line 1 = summary
//!     ├── addedFiles.txt   # tracked set frozen at commit time
//!     └── ...              # copies of tracked files, same relative paths
//! ```
//!
//! ## Atomicity
//!
//! The latest-version and tracked-set records are overwritten through
//! [`atomic_write`] (write-then-rename), so a reader never observes a
//! partially written value. There is no inter-process locking: the design
//! assumes one invocation per repository at a time, and concurrent writers
//! race on the latest-version record.

use crate::error::{Result, RewindError};
use crate::tracking::TrackedSet;
use crate::types::{RepositoryMetadata, VersionId};
use crate::utils::atomic_write;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Record holding the latest version number
const LATEST_VERSION_FILE: &str = "latestVersion.txt";
/// Record holding the current tracked-file set
const TRACKED_FILES_FILE: &str = "addedFiles.txt";
/// Per-version commit message record
const MESSAGE_FILE: &str = "message.txt";
/// Informational repository metadata
const METADATA_FILE: &str = "metadata.json";

/// Persistent store for repository state
///
/// A thin handle over the control directory. All mutation goes through the
/// defined operations; nothing else writes into the control directory.
#[derive(Debug, Clone)]
pub struct StateStore {
    /// The control directory
    root: PathBuf,
}

impl StateStore {
    /// Create the control directory and its empty records
    ///
    /// Fails with [`RewindError::AlreadyInitialized`] if the control
    /// directory already exists. The latest-version record is left empty
    /// here; initialization finishes by writing version 0 through the
    /// snapshot manager.
    pub fn create(root: PathBuf) -> Result<Self> {
        if root.exists() {
            return Err(RewindError::AlreadyInitialized(root));
        }

        fs::create_dir_all(&root)?;
        fs::write(root.join(LATEST_VERSION_FILE), b"")?;
        fs::write(root.join(TRACKED_FILES_FILE), b"")?;

        let metadata = RepositoryMetadata::current();
        let metadata_json = serde_json::to_string_pretty(&metadata)?;
        fs::write(root.join(METADATA_FILE), metadata_json)?;

        info!("Initialized repository state at {:?}", root);
        Ok(Self { root })
    }

    /// Open an existing control directory
    ///
    /// Fails with [`RewindError::NotInitialized`] if it does not exist.
    pub fn open(root: PathBuf) -> Result<Self> {
        if !root.exists() {
            return Err(RewindError::NotInitialized(root));
        }

        let store = Self { root };
        let metadata = store.read_metadata()?;
        if metadata.format_version != RepositoryMetadata::FORMAT_VERSION {
            warn!(
                "Repository format version {} differs from supported version {}",
                metadata.format_version,
                RepositoryMetadata::FORMAT_VERSION
            );
        }

        debug!("Opened repository state at {:?}", store.root);
        Ok(store)
    }

    /// The control directory path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding version `v`'s snapshot
    pub fn version_dir(&self, v: VersionId) -> PathBuf {
        self.root.join(v.to_string())
    }

    /// Path of version `v`'s message record
    pub fn message_path(&self, v: VersionId) -> PathBuf {
        self.version_dir(v).join(MESSAGE_FILE)
    }

    /// Path of version `v`'s frozen snapshot-set record
    pub fn snapshot_set_path(&self, v: VersionId) -> PathBuf {
        self.version_dir(v).join(TRACKED_FILES_FILE)
    }

    /// Path of the current tracked-set record
    pub fn tracked_record_path(&self) -> PathBuf {
        self.root.join(TRACKED_FILES_FILE)
    }

    /// Read the latest version number
    ///
    /// A missing or unparseable record is a [`RewindError::CorruptState`]:
    /// it means the repository invariants no longer hold and no operation
    /// can proceed safely.
    pub fn read_latest_version(&self) -> Result<VersionId> {
        let path = self.root.join(LATEST_VERSION_FILE);
        let contents = fs::read_to_string(&path)
            .map_err(|e| RewindError::corrupt(format!("cannot read {:?}: {}", path, e)))?;

        contents.trim().parse::<VersionId>().map_err(|_| {
            RewindError::corrupt(format!(
                "latest-version record holds {:?}, expected a decimal integer",
                contents.trim()
            ))
        })
    }

    /// Overwrite the latest version number
    pub fn write_latest_version(&self, v: VersionId) -> Result<()> {
        atomic_write(&self.root.join(LATEST_VERSION_FILE), v.to_string().as_bytes())?;
        debug!("Latest version advanced to {}", v);
        Ok(())
    }

    /// Read the current tracked-file set
    pub fn read_tracked_set(&self) -> Result<TrackedSet> {
        let contents = fs::read_to_string(self.tracked_record_path())?;
        Ok(TrackedSet::parse(&contents))
    }

    /// Overwrite the full tracked-set record
    pub fn write_tracked_set(&self, set: &TrackedSet) -> Result<()> {
        atomic_write(&self.tracked_record_path(), set.serialize().as_bytes())?;
        debug!("Tracked set persisted ({} paths)", set.len());
        Ok(())
    }

    /// Append a single entry to the tracked-set record
    ///
    /// Valid only when the set strictly grows without reordering, which is
    /// exactly the `add` case; every other mutation rewrites the record.
    pub fn append_tracked(&self, path: &Path) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(self.tracked_record_path())?;
        writeln!(file, "{}", path.display())?;
        debug!("Tracked set grew by {:?}", path);
        Ok(())
    }

    /// Read the repository metadata record
    pub fn read_metadata(&self) -> Result<RepositoryMetadata> {
        let path = self.root.join(METADATA_FILE);
        let contents = fs::read_to_string(&path)
            .map_err(|e| RewindError::corrupt(format!("cannot read {:?}: {}", path, e)))?;
        Ok(serde_json::from_str(&contents)?)
    }
}
