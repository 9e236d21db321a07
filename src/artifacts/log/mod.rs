//! Commit history traversal
//!
//! History is linear: every commit has at most one parent, so walking the
//! log is a matter of following `parent` links from HEAD.

pub mod rev_list;
