//! Index entry representation
//!
//! Each entry in the index represents a staged file with:
//! - File path, relative to the work dir, `/`-separated
//! - Content hash (blob object ID)
//! - File metadata (mode, size, modification time)

use crate::artifacts::index::entry_mode::EntryMode;
use crate::artifacts::objects::object_id::ObjectId;
use chrono::{DateTime, FixedOffset};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Path separator used inside the index, independent of the host platform
pub const PATH_SEPARATOR: char = '/';

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct IndexEntry {
    pub path: String,
    pub hash: ObjectId,
    pub mode: EntryMode,
    pub size: u64,
    pub mod_time: DateTime<FixedOffset>,
    pub staged: bool,
}

impl IndexEntry {
    /// Non-empty path segments, root first
    pub fn segments(&self) -> Vec<&str> {
        self.path
            .split(PATH_SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .collect()
    }

    pub fn basename(&self) -> &str {
        self.segments().last().copied().unwrap_or_default()
    }

    /// Every ancestor directory of the entry, outermost first
    ///
    /// `a/b/c` yields `["a", "a/b"]`; a top-level file yields nothing.
    pub fn parent_dirs(&self) -> Vec<String> {
        let segments = self.segments();
        let mut dirs = Vec::new();

        for depth in 1..segments.len() {
            dirs.push(segments[..depth].join("/"));
        }

        dirs
    }

    /// Whether this entry lives somewhere below `dir`
    pub fn is_under(&self, dir: &str) -> bool {
        self.path
            .strip_prefix(dir)
            .is_some_and(|rest| rest.starts_with(PATH_SEPARATOR))
    }
}
