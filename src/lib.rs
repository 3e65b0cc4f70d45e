//! Reproducible snapshots of a git working tree.
//!
//! keepsake captures the exact current state of a working tree as a durable,
//! addressable commit, without touching the current branch, the primary
//! staging area, or any file content. The capture builds a tree and a commit
//! out of the current tracked-file state through an isolated index file and
//! anchors the result with a uniquely named branch so it is never garbage
//! collected.
//!
//! The crate drives a real `git` binary through subprocess calls; it does not
//! reimplement object storage or history algorithms.
//!
//! ```rust,ignore
//! use keepsake::Repository;
//!
//! let repository = Repository::current();
//!
//! // Durable snapshot of the tracked-file state, dirty or not
//! let commit = repository.capture(Some("experiments"), false)?;
//!
//! // Read-only enforcement: fail unless everything is committed
//! let commit = repository.ensure_tracked()?;
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
pub mod executor;

pub use areas::repository::Repository;
pub use areas::staging::StagingContext;
pub use artifacts::branch::anchor_name::AnchorName;
pub use errors::{GitError, Result};
