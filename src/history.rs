//! Read-only access to stored version messages
//!
//! The history reader never mutates state: it enumerates version numbers
//! from the latest-version record and reads the per-version message files.
//! A message file that should exist but does not is a corrupt-state
//! failure, since the version-number invariant says every version from 0
//! to latest has a complete directory.

use crate::error::{Result, RewindError};
use crate::state::StateStore;
use crate::types::{HistoryEntry, VersionDetail, VersionId};
use std::fs;

/// All versions `0..=latest` in ascending order, with message summaries
pub fn list(store: &StateStore) -> Result<Vec<HistoryEntry>> {
    let latest = store.read_latest_version()?;
    (0..=latest)
        .map(|version| {
            Ok(HistoryEntry {
                version,
                summary: first_line(store, version)?,
            })
        })
        .collect()
}

/// The final `n` versions in descending order, clamped at version 0
pub fn list_last(store: &StateStore, n: u64) -> Result<Vec<HistoryEntry>> {
    let latest = store.read_latest_version()?;
    let count = n.min(latest + 1);
    let oldest = latest + 1 - count;
    (oldest..=latest)
        .rev()
        .map(|version| {
            Ok(HistoryEntry {
                version,
                summary: first_line(store, version)?,
            })
        })
        .collect()
}

/// Full message of `version`, defaulting to the latest version
///
/// Each line is trimmed, lines are rejoined, and the whole text is trimmed,
/// so trailing whitespace in the stored record never reaches the caller.
pub fn detail(store: &StateStore, version: Option<VersionId>) -> Result<VersionDetail> {
    let version = match version {
        Some(v) => v,
        None => store.read_latest_version()?,
    };

    let message = read_message(store, version)?
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();

    Ok(VersionDetail { version, message })
}

/// First line of `version`'s message
pub fn first_line(store: &StateStore, version: VersionId) -> Result<String> {
    Ok(read_message(store, version)?
        .lines()
        .next()
        .unwrap_or_default()
        .to_string())
}

fn read_message(store: &StateStore, version: VersionId) -> Result<String> {
    let path = store.message_path(version);
    fs::read_to_string(&path).map_err(|e| {
        RewindError::corrupt(format!(
            "cannot read message of version {}: {} ({:?})",
            version, e, path
        ))
    })
}
