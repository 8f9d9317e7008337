//! # rewind - Minimal local file versioning
//!
//! A small versioning engine for individual files: register the files you
//! care about, snapshot them into numbered immutable versions, and bring
//! any earlier version back.
//!
//! ## Overview
//!
//! rewind tracks an explicit set of files rather than a whole directory
//! tree. Every tracking change (add, detach) and every explicit commit
//! creates the next numbered version: a full copy of each tracked file's
//! content at that instant, plus the tracked set itself and a message.
//! Versions are dense (`0, 1, 2, ...`), immutable once written, and live
//! under a hidden `.rewind/` control directory in the working directory.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rewind::Repository;
//!
//! # fn main() -> rewind::Result<()> {
//! // Initialize; this creates version 0 with an empty tracked set
//! let mut repo = Repository::init("./my_project")?;
//!
//! // Start tracking a file (creates version 1)
//! repo.add("notes.txt", Some("first draft"))?;
//!
//! // After editing notes.txt, capture the new content (version 2)
//! repo.commit("notes.txt", None)?;
//!
//! // Restore the content captured in version 1
//! let result = repo.checkout(1)?;
//! println!("restored {} files", result.files_restored);
//! # Ok(())
//! # }
//! ```
//!
//! ## Key Concepts
//!
//! - **Tracked file**: a relative path registered via `add`, included in
//!   every subsequent snapshot until `detach`.
//! - **Version / snapshot**: an immutable numbered capture of the tracked
//!   set and tracked-file contents at one point in time. Every snapshot is
//!   a full copy; there is no delta storage, deduplication, or compression.
//! - **Checkout**: restoring working-directory files from a stored
//!   version. Checkout never deletes untracked files and never touches
//!   paths outside the target version's snapshot-set.
//!
//! ## Durability model
//!
//! The latest-version pointer is advanced *before* a new snapshot directory
//! is populated. A crash mid-snapshot therefore leaves the pointer ahead of
//! an incomplete directory; rewind makes no attempt at automatic rollback,
//! and the repository needs manual inspection in that case. Single-record
//! writes themselves are atomic (write-then-rename). There is no
//! inter-process locking: concurrent invocations against one repository
//! race on the latest-version record.
//!
//! ## Error Handling
//!
//! Operations return `Result<T, RewindError>`. Failure categories
//! (uninitialized, already initialized, file not found, invalid version,
//! corrupt state, I/O) are distinct variants so callers can map them to
//! distinct exit codes. The non-fatal situations "already tracked" and
//! "not tracked" are ordinary outcome values, not errors.
//!
//! ## Module Organization
//!
//! - [`repository`]: the `Repository` entry point tying everything together
//! - [`tracking`]: the ordered tracked-file set
//! - [`snapshot`]: snapshot-creation protocol
//! - [`checkout`]: restore engine
//! - [`history`]: version listing and message lookup
//! - [`state`]: durable records under the control directory
//! - [`types`]: shared data types
//! - [`error`]: error types and handling

// Public API modules
pub mod checkout;
pub mod error;
pub mod history;
pub mod repository;
pub mod snapshot;
pub mod state;
pub mod tracking;
pub mod types;

// Internal helpers
mod utils;

// Re-export main types for convenience
pub use error::{Result, RewindError};
pub use repository::{Repository, CONTROL_DIR};
pub use state::StateStore;
pub use tracking::TrackedSet;
pub use types::*;
