//! Utility functions for rewind
//!
//! Small filesystem helpers shared by the state store, the snapshot
//! manager, and the checkout engine.

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Atomic file write (write to temp file then rename)
///
/// Writes `content` to a sibling temporary file and renames it over `path`,
/// so a reader never observes a partially written record.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let temp_path = path.with_extension("tmp");

    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Copy `src` to `dst`, creating `dst`'s parent directories as needed
///
/// Overwrites `dst` if it already exists.
pub fn copy_with_parents(src: &Path, dst: &Path) -> Result<u64> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(fs::copy(src, dst)?)
}
