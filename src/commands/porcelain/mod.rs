//! Porcelain commands (user-facing operations)
//!
//! - `init`: lay out a new repository
//! - `add`: stage files or directories
//! - `commit`: record the index as a new commit
//! - `log`: show history from HEAD

pub mod add;
pub mod commit;
pub mod init;
pub mod log;
