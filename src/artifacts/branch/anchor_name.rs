//! Anchor branch names
//!
//! An anchor is a branch created for the sole purpose of keeping a snapshot
//! commit reachable, so garbage collection never reclaims it. Its name must
//! be unique across processes and calls even when two captures run in the
//! same microsecond window, which is why it embeds both a high-resolution
//! timestamp and the acting process's id.

use crate::artifacts::branch::INVALID_REF_NAME_REGEX;
use chrono::Utc;

/// Literal marker embedded in every anchor name.
const SNAPSHOT_MARKER: &str = "snapshot";

/// Name of the branch anchoring one captured commit.
///
/// Shape: `[<prefix>/]<identity>-snapshot-<UTC timestamp>-<pid>` where
/// `<identity>` is the branch name or abbreviated commit id that was current
/// at capture time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnchorName(String);

impl AnchorName {
    /// Build the anchor name for a capture happening right now.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Optional caller-supplied namespace, prepended with a `/`
    /// * `identity` - Branch name or short hash current at capture time
    pub fn generate(prefix: Option<&str>, identity: &str) -> Self {
        let timestamp = Utc::now().format("%Y%m%d%H%M%S%f");
        let name = format!(
            "{identity}-{SNAPSHOT_MARKER}-{timestamp}-{}",
            std::process::id()
        );

        match prefix {
            Some(prefix) if !prefix.is_empty() => AnchorName(format!("{prefix}/{name}")),
            _ => AnchorName(name),
        }
    }

    /// Check the name against git's ref-name rules.
    ///
    /// Generation from a well-formed identity always yields a valid name;
    /// a caller-supplied prefix can still spoil it, in which case branch
    /// creation surfaces the failure.
    pub fn is_valid(&self) -> bool {
        if self.0.is_empty() {
            return false;
        }

        regex::Regex::new(INVALID_REF_NAME_REGEX)
            .map(|re| !re.is_match(&self.0))
            .unwrap_or(false)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AnchorName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AnchorName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
