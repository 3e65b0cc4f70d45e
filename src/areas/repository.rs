//! Repository handle and metadata introspection
//!
//! A [`Repository`] is an opaque, stateless handle over a working directory
//! backed by git metadata. It is identified by an optional filesystem path;
//! absence means the current process working directory. All queries shell out
//! to git and cache nothing, so a handle never goes stale.

use crate::errors::Result;
use crate::executor;
use derive_new::new;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Fallback identity used when neither a branch name nor a commit id can be
/// resolved (a repository without any commits, typically).
pub const UNKNOWN_IDENTITY: &str = "unknown";

/// Handle over a git-backed working directory.
#[derive(Debug, Clone, Default, new)]
pub struct Repository {
    /// Repository path; `None` means the process working directory
    path: Option<PathBuf>,
}

impl Repository {
    /// Handle over the repository at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Repository::new(Some(path.into()))
    }

    /// Handle over the repository containing the process working directory.
    pub fn current() -> Self {
        Repository::new(None)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub(crate) fn run(&self, args: &[&str]) -> Result<String> {
        executor::run_git(args, self.path.as_deref(), None)
    }

    pub(crate) fn run_with_env(
        &self,
        args: &[&str],
        envs: &HashMap<String, String>,
    ) -> Result<String> {
        executor::run_git(args, self.path.as_deref(), Some(envs))
    }

    /// Check whether the working directory is clean.
    ///
    /// # Returns
    ///
    /// true iff a porcelain status query reports no entries at all (staged,
    /// unstaged, or untracked). Fails with the underlying status error if the
    /// path is not a repository.
    pub fn is_clean(&self) -> Result<bool> {
        let status = self.run(&["status", "--porcelain"])?;

        Ok(status.trim().is_empty())
    }

    /// Name of what is currently checked out, for labelling purposes.
    ///
    /// Returns the current branch name, the abbreviated commit id when HEAD
    /// is detached, or [`UNKNOWN_IDENTITY`] when neither resolves (no commits
    /// yet). Resolution failures are absorbed rather than propagated.
    pub fn current_identity(&self) -> String {
        let name = match self.run(&["rev-parse", "--abbrev-ref", "HEAD"]) {
            Ok(name) => name,
            Err(_) => return UNKNOWN_IDENTITY.to_string(),
        };

        if name != "HEAD" {
            return name;
        }

        // detached HEAD: label with the abbreviated commit id instead
        self.run(&["rev-parse", "--short", "HEAD"])
            .unwrap_or_else(|_| UNKNOWN_IDENTITY.to_string())
    }

    /// Absolute path of the repository's metadata directory (`.git`).
    ///
    /// git reports the directory relative to its working directory when it
    /// can; a relative result is resolved against the repository path.
    pub fn metadata_dir(&self) -> Result<PathBuf> {
        let metadata_dir = PathBuf::from(self.run(&["rev-parse", "--git-dir"])?);

        if metadata_dir.is_absolute() {
            return Ok(metadata_dir);
        }

        let base = match &self.path {
            Some(path) => path.clone(),
            None => std::env::current_dir()?,
        };

        Ok(base.join(metadata_dir))
    }
}
