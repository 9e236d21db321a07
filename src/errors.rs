//! Library error types
//!
//! Every component of the object store surfaces its failures through [`Error`].
//! The command layer is the first place where these are turned into
//! user-facing messages (wrapped in `anyhow` with extra context).

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// No `.git` directory was found at or above the given path.
    #[error("not a twig repository (or any of the parent directories): {path}")]
    NotARepository { path: PathBuf },

    #[error("object not found: {oid}")]
    ObjectNotFound { oid: String },

    /// The stored envelope is malformed or its declared length is wrong.
    #[error("invalid object format for {oid}: {reason}")]
    InvalidObjectFormat { oid: String, reason: String },

    #[error("unknown object type '{object_type}' in {oid}")]
    UnknownObjectType { oid: String, object_type: String },

    #[error("expected {oid} to be a {expected}, found a {actual}")]
    UnexpectedObjectType {
        oid: String,
        expected: String,
        actual: String,
    },

    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("invalid ref {}: {reason}", path.display())]
    InvalidRef { path: PathBuf, reason: String },

    #[error("duplicate tree entry: {name}")]
    DuplicateTreeEntry { name: String },

    /// Payload encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A working-tree path passed to `add` does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("{} is outside repository at {}", path.display(), root.display())]
    OutsideRepository { path: PathBuf, root: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_format(oid: impl ToString, reason: impl Into<String>) -> Self {
        Error::InvalidObjectFormat {
            oid: oid.to_string(),
            reason: reason.into(),
        }
    }
}
