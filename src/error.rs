//! Error types for the rewind library
//!
//! This module defines all error types that can occur during rewind
//! operations. The enum distinguishes every failure category the engine can
//! report, so the presentation layer can map each one to a distinct exit
//! status without parsing message strings.
//!
//! Note that "already tracked" and "not tracked" are deliberately *not*
//! errors: they are informational outcomes carried by the result types in
//! [`crate::types`], because both leave the repository untouched and
//! terminate normally.

use std::path::PathBuf;
use thiserror::Error;

/// Type alias for Results in the rewind library
pub type Result<T> = std::result::Result<T, RewindError>;

/// Main error type for all rewind operations
#[derive(Debug, Error)]
pub enum RewindError {
    /// I/O errors during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The working directory has no control directory
    #[error("Repository not initialized at {0:?}")]
    NotInitialized(PathBuf),

    /// The control directory already exists
    #[error("Repository already initialized at {0:?}")]
    AlreadyInitialized(PathBuf),

    /// A file named on the command line does not exist in the working directory
    #[error("File not found: {0:?}")]
    FileNotFound(PathBuf),

    /// Requested version number is outside `0..=latest`
    #[error("Invalid version number: {requested} (latest is {latest})")]
    InvalidVersion {
        /// Version the caller asked for
        requested: u64,
        /// Highest version that exists
        latest: u64,
    },

    /// A persisted record is missing or unparseable
    #[error("Corrupt repository state: {0}")]
    CorruptState(String),
}

impl RewindError {
    /// Create a corrupt-state error with a custom message
    pub fn corrupt(msg: impl Into<String>) -> Self {
        RewindError::CorruptState(msg.into())
    }

    /// Check if this error is in the unexpected-failure category
    /// (an I/O or storage problem rather than a user mistake)
    pub fn is_system(&self) -> bool {
        matches!(
            self,
            RewindError::Io(_) | RewindError::Json(_) | RewindError::CorruptState(_)
        )
    }
}
