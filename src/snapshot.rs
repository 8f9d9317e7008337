//! Version snapshot creation
//!
//! Every commit-triggering operation (add, detach, explicit commit) funnels
//! through [`create_snapshot`], which captures the tracked set and the
//! current content of every tracked file into a new numbered, immutable
//! version directory.
//!
//! ## Protocol
//!
//! 1. Read the latest version number `v`; the new version is `v + 1`.
//! 2. Persist `v + 1` as the new latest version. The pointer moves before
//!    the directory is populated: a failure in the steps below leaves the
//!    pointer ahead of an incomplete snapshot directory, with no automatic
//!    rollback. Manual inspection is the recovery path.
//! 3. Create the version directory.
//! 4. Freeze the current tracked-set record into it.
//! 5. Copy the content of every tracked file that currently exists in the
//!    working directory, under the same relative path. Paths that vanished
//!    between tracking and snapshot time are skipped silently.
//! 6. Write the message record (summary line plus optional user line).
//!
//! On success the new version is a complete, self-contained capture; it is
//! never modified afterwards.

use crate::error::Result;
use crate::state::StateStore;
use crate::tracking::TrackedSet;
use crate::types::VersionId;
use crate::utils::copy_with_parents;
use std::fs;
use std::path::Path;
use tracing::{debug, info, trace};

/// Create version `latest + 1` from the current tracked set
///
/// `summary` becomes the first line of the message record; `user_message`,
/// if present, is appended as a further line.
///
/// # Errors
///
/// Any I/O failure after the latest-version pointer has been advanced is
/// fatal to the invoking command and leaves the pointer ahead of the
/// incomplete snapshot (see the module docs).
pub fn create_snapshot(
    store: &StateStore,
    working_dir: &Path,
    summary: &str,
    user_message: Option<&str>,
) -> Result<VersionId> {
    let latest = store.read_latest_version()?;
    let next = latest + 1;

    store.write_latest_version(next)?;
    populate_version_dir(store, working_dir, next, summary, user_message)?;

    info!("Created version {} ({})", next, summary);
    Ok(next)
}

/// Populate a version directory: frozen set, content copies, message
///
/// Also used directly for version 0 at initialization, where the tracked
/// set is empty and only the records are written.
pub(crate) fn populate_version_dir(
    store: &StateStore,
    working_dir: &Path,
    version: VersionId,
    summary: &str,
    user_message: Option<&str>,
) -> Result<()> {
    let version_dir = store.version_dir(version);
    fs::create_dir(&version_dir)?;

    // Freeze the tracked-set record as this version's snapshot-set
    fs::copy(store.tracked_record_path(), store.snapshot_set_path(version))?;

    let set = TrackedSet::parse(&fs::read_to_string(store.snapshot_set_path(version))?);
    for path in set.iter() {
        let src = working_dir.join(path);
        if src.exists() {
            let bytes = copy_with_parents(&src, &version_dir.join(path))?;
            trace!("Captured {:?} ({} bytes)", path, bytes);
        } else {
            debug!("Tracked file {:?} vanished before capture, skipping", path);
        }
    }

    write_message(store, version, summary, user_message)
}

/// Write the message record: summary line plus optional user line, trimmed
fn write_message(
    store: &StateStore,
    version: VersionId,
    summary: &str,
    user_message: Option<&str>,
) -> Result<()> {
    let mut message = summary.to_string();
    if let Some(extra) = user_message {
        message.push('\n');
        message.push_str(extra);
    }
    fs::write(store.message_path(version), message.trim())?;
    Ok(())
}
