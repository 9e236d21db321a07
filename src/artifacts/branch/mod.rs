pub mod branch_name;

/// Names git refuses for refs: leading dots, `..`, `@{`, `.lock` suffixes,
/// control characters and the glob/revision metacharacters
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

pub const DEFAULT_BRANCH: &str = "main";
