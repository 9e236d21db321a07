use crate::artifacts::branch::{DEFAULT_BRANCH, INVALID_BRANCH_NAME_REGEX};
use crate::errors::{Error, Result};

const REF_PREFIX: &str = "refs/heads/";

/// A validated branch name such as `main` or `feature/login`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
            .map_err(|err| Error::InvalidBranchName(format!("{name}: {err}")))?;

        if name.is_empty() || re.is_match(&name) {
            return Err(Error::InvalidBranchName(name));
        }

        Ok(Self(name))
    }

    /// Extract the branch from a symbolic ref target like `refs/heads/main`
    pub fn from_ref_path(ref_path: &str) -> Option<Self> {
        ref_path
            .strip_prefix(REF_PREFIX)
            .and_then(|name| Self::try_parse(name).ok())
    }

    /// Path of the branch ref relative to `.git`
    pub fn to_ref_path(&self) -> String {
        format!("{REF_PREFIX}{}", self.0)
    }
}

impl Default for BranchName {
    fn default() -> Self {
        Self(DEFAULT_BRANCH.to_string())
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
