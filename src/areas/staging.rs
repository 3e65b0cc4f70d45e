//! Isolated staging areas
//!
//! A capture must read the working tree's tracked-file state through an index
//! without ever touching the repository's primary one: other git processes
//! (and the user's own ongoing edits) keep operating on `.git/index` while a
//! capture is in flight. A [`StagingContext`] owns a disposable index file
//! with a unique name inside the metadata directory and the environment
//! override that points git's staging operations at it.
//!
//! Isolation comes from uniqueness of the file path, not from locks: the
//! path embeds a random token plus the process id, and the file is reserved
//! with an atomic create-new so a collision fails loudly instead of silently
//! corrupting another capture's staging area.

use crate::areas::repository::Repository;
use crate::errors::{GitError, Result};
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Environment variable git reads to locate the index file it operates on.
const INDEX_FILE_ENV: &str = "GIT_INDEX_FILE";

/// File name of the primary index inside the metadata directory.
const PRIMARY_INDEX: &str = "index";

/// Disposable staging area scoped to one capture operation.
///
/// Dropping the context removes the index file, on success and failure paths
/// alike.
pub struct StagingContext {
    index_path: PathBuf,
    env: HashMap<String, String>,
}

impl StagingContext {
    /// Reserve a unique index file inside the metadata directory and seed it
    /// with the primary index's baseline.
    ///
    /// When the primary index exists and is non-empty its bytes are copied
    /// over, so the isolated area starts from the same tracked-file set and
    /// modes as the real one. A brand-new repository gets an empty-tree index
    /// instead; if even that initialization fails, the reserved empty file
    /// stands in and later index operations establish content.
    pub fn acquire(repository: &Repository) -> Result<Self> {
        let metadata_dir = repository.metadata_dir()?;
        let token: u64 = rand::random();
        let index_path = metadata_dir.join(format!(
            "index.snapshot-{:016x}-{}",
            token,
            std::process::id()
        ));

        // Atomic reservation: an existing file means another capture picked
        // the same name, which must fail rather than overwrite its state.
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&index_path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::AlreadyExists => GitError::CommandFailed(format!(
                    "staging area collision at {}",
                    index_path.display()
                )),
                _ => GitError::Io(e),
            })?;

        let env = HashMap::from([(
            INDEX_FILE_ENV.to_string(),
            index_path.display().to_string(),
        )]);

        let context = StagingContext { index_path, env };
        context.seed_baseline(repository, &metadata_dir)?;

        Ok(context)
    }

    fn seed_baseline(&self, repository: &Repository, metadata_dir: &Path) -> Result<()> {
        let primary = metadata_dir.join(PRIMARY_INDEX);
        let has_baseline = primary
            .metadata()
            .map(|stat| stat.len() > 0)
            .unwrap_or(false);

        if has_baseline {
            std::fs::copy(&primary, &self.index_path)?;
        } else {
            let _ = repository.run_with_env(&["read-tree", "--empty"], &self.env);
        }

        Ok(())
    }

    /// Refresh every tracked file's current content into the isolated index.
    ///
    /// `add --update` records both staged and unstaged edits of files the
    /// repository already tracks and never picks up untracked paths. A
    /// repository without tracked files is a no-op, not a failure.
    pub fn populate_tracked_changes(&self, repository: &Repository) -> Result<()> {
        repository.run_with_env(&["add", "--update"], &self.env)?;

        Ok(())
    }

    /// Environment overrides redirecting git's staging operations to this
    /// context's index file.
    pub fn env(&self) -> &HashMap<String, String> {
        &self.env
    }

    pub fn index_path(&self) -> &Path {
        &self.index_path
    }
}

impl Drop for StagingContext {
    fn drop(&mut self) {
        // Cleanup is idempotent: a file that already vanished is fine.
        if let Err(e) = std::fs::remove_file(&self.index_path)
            && e.kind() != std::io::ErrorKind::NotFound
        {
            log::warn!(
                "failed to remove staging area {}: {}",
                self.index_path.display(),
                e
            );
        }
    }
}
