//! Subprocess invocation of the git binary.
//!
//! Every operation in this crate goes through [`run_git`]: a blocking call
//! that captures stdout and turns a non-zero exit into a typed error. There
//! are no retries; callers decide whether a failure is an expected outcome
//! (a repository without commits, say) and swallow it themselves.

use crate::errors::{GitError, Result};
use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

/// Run a git command and return its trimmed standard output.
///
/// # Arguments
///
/// * `args` - Arguments passed to git (e.g. `["rev-parse", "HEAD"]`)
/// * `dir` - Working directory for the subprocess; `None` inherits the
///   caller's current directory
/// * `envs` - Environment overrides merged over the inherited environment;
///   overrides take precedence, the caller's own environment is never mutated
///
/// # Returns
///
/// Standard output with trailing whitespace trimmed on exit code zero;
/// `NotARepository` or `CommandFailed` carrying the captured stderr otherwise.
pub fn run_git(
    args: &[&str],
    dir: Option<&Path>,
    envs: Option<&HashMap<String, String>>,
) -> Result<String> {
    let mut command = Command::new("git");
    command.args(args);

    if let Some(dir) = dir {
        command.current_dir(dir);
    }

    if let Some(envs) = envs {
        command.envs(envs);
    }

    log::debug!("running git {}", args.join(" "));

    let output = command.output()?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout)
            .trim_end()
            .to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if stderr.contains("not a git repository") {
            Err(GitError::NotARepository(stderr))
        } else {
            Err(GitError::CommandFailed(stderr))
        }
    }
}
