pub mod anchor_name;

/// Pattern matching every ref-name construct git rejects: leading dots or
/// slashes, `..`, `/.`, trailing slashes or `.lock`, `@{`, control and glob
/// characters.
pub const INVALID_REF_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";
