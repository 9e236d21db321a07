//! Tree object
//!
//! Trees represent directory snapshots. They contain entries for files (blobs)
//! and subdirectories (other trees), along with their names and modes.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>` where `<entries>` is a JSON array:
//!
//! ```text
//! [{"mode":"100644","name":"a.txt","hash":"<sha>","type":"blob"}, ...]
//! ```
//!
//! Entries are always sorted by name (byte-wise), files and directories mixed.

use crate::artifacts::index::entry_mode::EntryMode;
use crate::artifacts::objects::object::{Packable, Unpackable, hash_object};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{Error, Result};
use bytes::Bytes;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A single named entry of a tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct TreeEntry {
    pub mode: EntryMode,
    pub name: String,
    pub hash: ObjectId,
    #[serde(rename = "type")]
    pub kind: ObjectType,
}

impl TreeEntry {
    pub fn blob(name: impl Into<String>, hash: ObjectId, mode: EntryMode) -> Self {
        TreeEntry::new(mode, name.into(), hash, ObjectType::Blob)
    }

    pub fn tree(name: impl Into<String>, hash: ObjectId) -> Self {
        TreeEntry::new(EntryMode::Directory, name.into(), hash, ObjectType::Tree)
    }

    pub fn is_tree(&self) -> bool {
        self.kind == ObjectType::Tree
    }
}

/// Directory snapshot, frozen at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
    payload: Bytes,
    oid: ObjectId,
}

impl Tree {
    /// Build a tree from entries given in any order
    ///
    /// Entries are sorted into canonical order before the payload and
    /// identifier are computed. Two entries with the same name are rejected.
    pub fn new(mut entries: Vec<TreeEntry>) -> Result<Self> {
        entries.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));

        if let Some(pair) = entries.windows(2).find(|pair| pair[0].name == pair[1].name) {
            return Err(Error::DuplicateTreeEntry {
                name: pair[0].name.clone(),
            });
        }

        let payload = Bytes::from(serde_json::to_vec(&entries)?);
        let oid = hash_object(ObjectType::Tree, &payload);

        Ok(Tree {
            entries,
            payload,
            oid,
        })
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    pub fn entry(&self, name: &str) -> Option<&TreeEntry> {
        self.entries
            .binary_search_by(|entry| entry.name.as_bytes().cmp(name.as_bytes()))
            .ok()
            .map(|index| &self.entries[index])
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn display(&self) -> String {
        self.entries
            .iter()
            .map(|entry| {
                format!(
                    "{} {} {}\t{}",
                    entry.mode.as_str(),
                    entry.kind.as_str(),
                    entry.hash,
                    entry.name
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl Packable for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn payload(&self) -> &Bytes {
        &self.payload
    }

    fn object_id(&self) -> &ObjectId {
        &self.oid
    }
}

impl Unpackable for Tree {
    fn deserialize(payload: Bytes) -> Result<Self> {
        let entries: Vec<TreeEntry> = serde_json::from_slice(&payload)?;
        // keep the stored bytes so the id always matches the object's path
        let oid = hash_object(ObjectType::Tree, &payload);

        if entries
            .windows(2)
            .any(|pair| pair[0].name.as_bytes() >= pair[1].name.as_bytes())
        {
            return Err(Error::invalid_format(
                &oid,
                "tree entries are not sorted by name or not unique",
            ));
        }

        Ok(Tree {
            entries,
            payload,
            oid,
        })
    }
}
