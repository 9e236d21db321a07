//! Blob object
//!
//! Blobs store file content. They contain only the raw file data,
//! without any metadata like filename or permissions (those are stored in trees).
//!
//! ## Format
//!
//! On disk: `blob <size>\0<content>`

use crate::artifacts::objects::object::{Packable, Unpackable, hash_object};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::Result;
use bytes::Bytes;

/// Raw file content, identified by the hash of its envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    content: Bytes,
    oid: ObjectId,
}

impl Blob {
    pub fn new(content: impl Into<Bytes>) -> Self {
        let content = content.into();
        let oid = hash_object(ObjectType::Blob, &content);

        Blob { content, oid }
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn display(&self) -> String {
        String::from_utf8_lossy(&self.content).to_string()
    }
}

impl Packable for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }

    fn payload(&self) -> &Bytes {
        &self.content
    }

    fn object_id(&self) -> &ObjectId {
        &self.oid
    }
}

impl Unpackable for Blob {
    fn deserialize(payload: Bytes) -> Result<Self> {
        Ok(Blob::new(payload))
    }
}
