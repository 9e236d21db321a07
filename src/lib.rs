//! twig: a minimal git-compatible object store with a commit engine
//!
//! - `areas`: the on-disk parts of a repository (objects, index, refs, work dir)
//! - `artifacts`: value types and algorithms (objects, index entries, tree building, history)
//! - `commands`: repository operations behind the CLI
//! - `config`: settings resolved from the environment
//! - `errors`: the library error type

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
