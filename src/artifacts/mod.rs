//! Data structures and algorithms
//!
//! - `branch`: branch name validation
//! - `index`: index entries and file modes
//! - `log`: commit history traversal
//! - `objects`: object types (blob, tree, commit) and their codec
//! - `tree_builder`: index to tree hierarchy conversion

pub mod branch;
pub mod index;
pub mod log;
pub mod objects;
pub mod tree_builder;
