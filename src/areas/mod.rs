//! Core repository components
//!
//! - `database`: object store for blobs, trees and commits
//! - `index`: staging area persisted as JSON
//! - `refs`: HEAD and branch references
//! - `repository`: ties the other areas together
//! - `workspace`: working directory file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
