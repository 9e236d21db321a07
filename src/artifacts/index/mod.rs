//! Staging index file format
//!
//! The index is a JSON array of [`index_entry::IndexEntry`] stored at
//! `.git/index`. A freshly initialized repository holds `[]`.

pub mod entry_mode;
pub mod index_entry;

/// Content of an empty index file
pub const EMPTY_INDEX: &str = "[]";
