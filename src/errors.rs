//! Error types shared across the crate.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitError>;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("not a git repository: {0}")]
    NotARepository(String),

    #[error("git command failed: {0}")]
    CommandFailed(String),

    #[error("{}", format_changes(.changes))]
    DirtyWorkingDirectory { changes: Vec<String> },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_changes(changes: &[String]) -> String {
    if changes.is_empty() {
        return "working directory is not clean".to_string();
    }

    let listing = changes
        .iter()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!("uncommitted changes detected:\n{listing}")
}
