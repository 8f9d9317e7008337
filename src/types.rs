//! Core data types used throughout the rewind library
//!
//! This module contains the fundamental data structures shared across the
//! components of the library:
//!
//! - **Identifiers**: [`VersionId`] - dense version numbers starting at 0
//! - **Operation results**: [`AddOutcome`], [`DetachOutcome`],
//!   [`CommitOutcome`], [`CheckoutResult`] - what each user-level operation
//!   reports back
//! - **History**: [`HistoryEntry`], [`VersionDetail`] - read-only views of
//!   stored versions
//! - **Metadata**: [`RepositoryMetadata`] - the informational record written
//!   once at initialization
//!
//! The outcome enums exist because "already tracked" and "not tracked" are
//! normal, non-fatal results of `add`/`detach`/`commit`: the repository is
//! left untouched and the caller reports the situation to the user. Only
//! genuine failures travel through [`crate::error::RewindError`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a version snapshot
///
/// Versions are numbered densely from 0 (created at initialization) upward;
/// every commit-triggering operation produces `latest + 1`.
pub type VersionId = u64;

/// Informational metadata stored alongside the version records
///
/// Written once when the repository is initialized. The engine's behavior is
/// driven entirely by the text records (`latestVersion.txt`,
/// `addedFiles.txt`, version directories); this record only identifies the
/// on-disk format and the tool that created it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryMetadata {
    /// Version of the on-disk layout
    pub format_version: u32,
    /// rewind version that created the repository
    pub tool_version: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl RepositoryMetadata {
    /// Current on-disk layout version
    pub const FORMAT_VERSION: u32 = 1;

    /// Metadata for a repository created by this build
    pub fn current() -> Self {
        Self {
            format_version: Self::FORMAT_VERSION,
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Result of [`crate::Repository::add`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The path was registered and a new version was created
    Added {
        /// The version that captured the grown tracked set
        version: VersionId,
    },
    /// The path was already tracked; nothing changed
    AlreadyTracked,
}

/// Result of [`crate::Repository::detach`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetachOutcome {
    /// The path was removed from tracking and a new version was created
    Detached {
        /// The version that captured the reduced tracked set
        version: VersionId,
    },
    /// The path was not tracked; nothing changed
    NotTracked,
}

/// Result of [`crate::Repository::commit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A new snapshot of the tracked set was created
    Committed {
        /// The newly created version
        version: VersionId,
    },
    /// The path was not tracked; nothing changed
    NotTracked,
}

/// Result of a checkout operation
///
/// Reports how many snapshot-set paths were written back into the working
/// directory. `files_skipped` counts paths that were recorded in the
/// snapshot-set but had no stored copy because they had vanished from the
/// working directory at commit time; checkout leaves those untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutResult {
    /// Version that was checked out
    pub version: VersionId,
    /// Number of files restored into the working directory
    pub files_restored: usize,
    /// Snapshot-set paths with no stored copy, left untouched
    pub files_skipped: usize,
}

/// One line of `history` output: a version and its message summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Version number
    pub version: VersionId,
    /// First line of the version's message
    pub summary: String,
}

/// Full message of a single version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDetail {
    /// Version number
    pub version: VersionId,
    /// Complete message text, line-trimmed
    pub message: String,
}
