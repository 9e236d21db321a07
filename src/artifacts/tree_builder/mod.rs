//! Index to tree conversion
//!
//! The staging index is a flat list of paths. At commit time it is turned into
//! a hierarchy of tree objects:
//!
//! 1. every path is split on `/` and filed into an arena of directory nodes;
//! 2. the arena is folded bottom-up, each subdirectory becoming a tree that is
//!    stored before its parent references it;
//! 3. every level is sorted by name before its tree is built.
//!
//! The root tree is handed back to the caller, which stores it.

pub mod arena;

use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::tree::Tree;
use crate::errors::Result;
use arena::DirectoryArena;

/// Build the root tree for `entries`, storing every subtree through `store`
pub fn build_tree<'e, F>(entries: impl IntoIterator<Item = &'e IndexEntry>, store: F) -> Result<Tree>
where
    F: FnMut(&Tree) -> Result<()>,
{
    DirectoryArena::from_entries(entries).fold(store)
}
