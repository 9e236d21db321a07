//! Command implementations
//!
//! - `plumbing`: low-level object commands (hash-object, load-object, write-commit)
//! - `porcelain`: user-facing commands (init, add, commit, log)
//!
//! Every command is an `impl Repository` block. Operations that other code
//! builds on return [`crate::errors::Result`]; the ones that print return
//! `anyhow::Result` with context attached.

pub mod plumbing;
pub mod porcelain;
