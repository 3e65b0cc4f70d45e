//! Side-commit capture
//!
//! The capture sequence builds a tree and a commit out of the working tree's
//! current tracked-file state through an isolated staging area, then anchors
//! the commit with a uniquely named branch. From the user's perspective the
//! whole sequence is a single atomic read: the working tree, the primary
//! index, and HEAD are bit-for-bit identical before and after.

use crate::areas::repository::Repository;
use crate::areas::staging::StagingContext;
use crate::artifacts::branch::anchor_name::AnchorName;
use crate::errors::Result;

/// Fixed message carried by every snapshot commit.
pub const SNAPSHOT_COMMIT_MESSAGE: &str = "Working tree snapshot";

impl Repository {
    /// Capture the current tracked-file state as a durable, anchored commit.
    ///
    /// A clean repository short-circuits to the current commit id unless
    /// `force` is set; nothing is created on that path. Otherwise the capture
    /// stages every tracked file's current content (staged and unstaged edits
    /// included, untracked files deliberately omitted) into a disposable
    /// index, writes a tree and a commit from it, and creates an anchor
    /// branch named after `prefix` and the current branch or commit so the
    /// snapshot survives garbage collection.
    ///
    /// A repository without commits yields a root commit: parent resolution
    /// failures are absorbed wholesale rather than propagated. Every other
    /// git failure is fatal and surfaces after the staging area has been
    /// cleaned up. In a repository that is clean because it has no commits
    /// and no files, the non-forced path fails with the underlying HEAD
    /// resolution error since there is nothing to return.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Optional namespace for the anchor branch name
    /// * `force` - Capture even when the working directory is clean
    ///
    /// # Returns
    ///
    /// The captured commit's id.
    pub fn capture(&self, prefix: Option<&str>, force: bool) -> Result<String> {
        if !force && self.is_clean()? {
            return self.most_recent_commit();
        }

        let identity = self.current_identity();

        // From here on the staging file is removed on every exit path: the
        // context's Drop runs on success and on early `?` returns alike.
        let staging = StagingContext::acquire(self)?;

        staging.populate_tracked_changes(self)?;

        let tree = self.run_with_env(&["write-tree"], staging.env())?;

        // No resolvable parent means the snapshot becomes a root commit.
        let parent = self.run(&["rev-parse", "HEAD"]).ok();

        let commit = match &parent {
            Some(parent) => self.run(&[
                "commit-tree",
                &tree,
                "-p",
                parent,
                "-m",
                SNAPSHOT_COMMIT_MESSAGE,
            ])?,
            None => self.run(&["commit-tree", &tree, "-m", SNAPSHOT_COMMIT_MESSAGE])?,
        };

        let anchor = AnchorName::generate(prefix, &identity);
        self.run(&["branch", anchor.as_str(), &commit])?;

        log::info!("captured snapshot {commit} anchored at {anchor}");

        Ok(commit)
    }
}
