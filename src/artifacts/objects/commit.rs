//! Commit object
//!
//! Commits link a tree snapshot to its (single, optional) parent commit,
//! together with an author, a message and a timestamp.
//!
//! ## Format
//!
//! On disk: `commit <size>\0<record>` where `<record>` is a JSON object with
//! the fields in this order:
//!
//! ```text
//! {"tree":"<sha>","parent":"<sha>","author":"...","message":"...","timestamp":"<rfc3339>"}
//! ```
//!
//! `parent` is omitted for the first commit of a lineage.

use crate::artifacts::objects::object::{Packable, Unpackable, hash_object};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::Result;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CommitRecord {
    tree: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<ObjectId>,
    author: String,
    message: String,
    timestamp: DateTime<FixedOffset>,
}

/// Snapshot record, frozen at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    record: CommitRecord,
    payload: Bytes,
    oid: ObjectId,
}

impl Commit {
    pub fn new(
        tree: ObjectId,
        parent: Option<ObjectId>,
        author: String,
        message: String,
        timestamp: DateTime<FixedOffset>,
    ) -> Result<Self> {
        Self::from_record(CommitRecord {
            tree,
            parent,
            author,
            message,
            timestamp,
        })
    }

    fn from_record(record: CommitRecord) -> Result<Self> {
        let payload = Bytes::from(serde_json::to_vec(&record)?);
        let oid = hash_object(ObjectType::Commit, &payload);

        Ok(Commit {
            record,
            payload,
            oid,
        })
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.record.tree
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.record.parent.as_ref()
    }

    pub fn author(&self) -> &str {
        &self.record.author
    }

    pub fn message(&self) -> &str {
        &self.record.message
    }

    /// First line of the message, used by one-line summaries
    pub fn short_message(&self) -> &str {
        self.record.message.lines().next().unwrap_or("")
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.record.timestamp
    }

    /// Timestamp in the form "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.record
            .timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    pub fn display(&self) -> String {
        let mut lines = vec![format!("tree {}", self.record.tree)];
        if let Some(parent) = &self.record.parent {
            lines.push(format!("parent {parent}"));
        }
        lines.push(format!("author {}", self.record.author));
        lines.push(format!("date {}", self.record.timestamp.to_rfc3339()));
        lines.push(String::new());
        lines.push(self.record.message.to_string());

        lines.join("\n")
    }
}

impl Packable for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn payload(&self) -> &Bytes {
        &self.payload
    }

    fn object_id(&self) -> &ObjectId {
        &self.oid
    }
}

impl Unpackable for Commit {
    fn deserialize(payload: Bytes) -> Result<Self> {
        let record: CommitRecord = serde_json::from_slice(&payload)?;
        let oid = hash_object(ObjectType::Commit, &payload);

        Ok(Commit {
            record,
            payload,
            oid,
        })
    }
}
