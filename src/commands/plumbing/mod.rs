//! Plumbing commands (low-level object operations)
//!
//! - `hash-object`: compute a blob id and optionally store it
//! - `load-object`: print a stored object
//! - `write_tree` / `write_commit`: turn the index into trees and a commit

pub mod hash_object;
pub mod load_object;
pub mod write_commit;
