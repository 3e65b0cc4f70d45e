//! Read-only commit queries
//!
//! Plain command wrappers with no isolation or concurrency concerns. They
//! exist so experiment harnesses can record which commit a run came from, or
//! refuse to run at all when the working tree has drifted from history.

use crate::areas::repository::Repository;
use crate::errors::{GitError, Result};

impl Repository {
    /// Commit id of HEAD, regardless of working tree state.
    ///
    /// # Returns
    ///
    /// The full hash of the most recent commit; fails when the repository has
    /// no commits.
    pub fn most_recent_commit(&self) -> Result<String> {
        self.run(&["rev-parse", "HEAD"])
    }

    /// Commit id of HEAD, but only when the working directory is clean.
    ///
    /// # Returns
    ///
    /// `Some(hash)` when no staged, unstaged, or untracked changes exist,
    /// `None` otherwise. A dirty working tree is not an error here.
    pub fn commit_if_clean(&self) -> Result<Option<String>> {
        if self.is_clean()? {
            return Ok(Some(self.most_recent_commit()?));
        }

        Ok(None)
    }

    /// Enforce that the current code state is fully committed.
    ///
    /// # Returns
    ///
    /// The commit id when the working directory is clean; otherwise a
    /// `DirtyWorkingDirectory` error enumerating every changed path from a
    /// short-format status query (or a generic message in the unexpected
    /// case where the query reports no lines despite dirtiness).
    pub fn ensure_tracked(&self) -> Result<String> {
        if let Some(commit) = self.commit_if_clean()? {
            return Ok(commit);
        }

        let status = self.run(&["status", "--short"])?;
        let changes = status
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();

        Err(GitError::DirtyWorkingDirectory { changes })
    }
}
