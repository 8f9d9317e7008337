//! Restoring working-directory files from a stored version
//!
//! Checkout walks the target version's frozen snapshot-set and writes every
//! stored content copy back into the working directory, creating or
//! replacing files as needed. It is deliberately non-destructive beyond
//! that: untracked working-directory files are never deleted, and paths
//! outside the target snapshot-set are never touched. A snapshot-set path
//! without a stored copy (the file had vanished at commit time) is left
//! alone in the working directory.

use crate::error::{Result, RewindError};
use crate::state::StateStore;
use crate::tracking::TrackedSet;
use crate::types::{CheckoutResult, VersionId};
use crate::utils::copy_with_parents;
use std::fs;
use std::path::Path;
use tracing::{debug, info, trace};

/// Restore every file recorded in `version`'s snapshot into `working_dir`
///
/// # Errors
///
/// - [`RewindError::InvalidVersion`] if `version` exceeds the latest version
/// - I/O failures while reading the snapshot or writing the working copy
pub fn checkout(store: &StateStore, working_dir: &Path, version: VersionId) -> Result<CheckoutResult> {
    let latest = store.read_latest_version()?;
    if version > latest {
        return Err(RewindError::InvalidVersion {
            requested: version,
            latest,
        });
    }

    let set = TrackedSet::parse(&fs::read_to_string(store.snapshot_set_path(version))?);
    let version_dir = store.version_dir(version);

    let mut files_restored = 0;
    let mut files_skipped = 0;
    for path in set.iter() {
        let stored = version_dir.join(path);
        if stored.exists() {
            let bytes = copy_with_parents(&stored, &working_dir.join(path))?;
            trace!("Restored {:?} ({} bytes)", path, bytes);
            files_restored += 1;
        } else {
            // Recorded in the set but never captured; leave the working copy alone
            debug!("No stored copy of {:?} in version {}, skipping", path, version);
            files_skipped += 1;
        }
    }

    info!(
        "Checked out version {} ({} restored, {} skipped)",
        version, files_restored, files_skipped
    );
    Ok(CheckoutResult {
        version,
        files_restored,
        files_skipped,
    })
}
