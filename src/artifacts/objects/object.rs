use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::errors::{Error, Result};
use bytes::Bytes;

/// Capability shared by every object kind: a type tag, a canonical payload
/// and the identifier derived from both.
///
/// Implementors compute the payload and identifier once, when the value is
/// constructed, and never change afterwards.
pub trait Packable {
    fn object_type(&self) -> ObjectType;

    fn payload(&self) -> &Bytes;

    fn object_id(&self) -> &ObjectId;

    /// Full envelope: `<type> <size>\0<payload>`
    fn envelope(&self) -> Bytes {
        envelope(self.object_type(), self.payload())
    }
}

pub trait Unpackable {
    /// Rebuild an object from a payload read back from the store
    fn deserialize(payload: Bytes) -> Result<Self>
    where
        Self: Sized;
}

pub fn envelope(object_type: ObjectType, payload: &[u8]) -> Bytes {
    let header = format!("{} {}\0", object_type.as_str(), payload.len());

    let mut object_bytes = Vec::with_capacity(header.len() + payload.len());
    object_bytes.extend_from_slice(header.as_bytes());
    object_bytes.extend_from_slice(payload);

    Bytes::from(object_bytes)
}

/// Identifier of an object with the given type and payload
pub fn hash_object(object_type: ObjectType, payload: &[u8]) -> ObjectId {
    ObjectId::digest(&envelope(object_type, payload))
}

/// Split a decompressed envelope into its type and payload
///
/// `oid` is only used to label errors.
pub fn parse_envelope(oid: &ObjectId, data: Bytes) -> Result<(ObjectType, Bytes)> {
    let nul = data
        .iter()
        .position(|&b| b == 0)
        .ok_or_else(|| Error::invalid_format(oid, "missing header terminator"))?;

    let header = std::str::from_utf8(&data[..nul])
        .map_err(|_| Error::invalid_format(oid, "header is not valid UTF-8"))?;
    let payload = data.slice(nul + 1..);

    let mut parts = header.split(' ');
    let (object_type, size) = match (parts.next(), parts.next(), parts.next()) {
        (Some(object_type), Some(size), None) => (object_type, size),
        _ => {
            return Err(Error::invalid_format(
                oid,
                format!("malformed header '{header}'"),
            ));
        }
    };

    let size = size
        .parse::<usize>()
        .map_err(|_| Error::invalid_format(oid, format!("invalid object size '{size}'")))?;
    if size != payload.len() {
        return Err(Error::invalid_format(
            oid,
            format!("declared size {size} but payload has {} bytes", payload.len()),
        ));
    }

    let object_type = ObjectType::parse(object_type).ok_or_else(|| Error::UnknownObjectType {
        oid: oid.to_string(),
        object_type: object_type.to_string(),
    })?;

    Ok((object_type, payload))
}

/// Any object that can live in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    Blob(Blob),
    Tree(Tree),
    Commit(Commit),
}

impl Object {
    pub fn deserialize(object_type: ObjectType, payload: Bytes) -> Result<Self> {
        Ok(match object_type {
            ObjectType::Blob => Object::Blob(Blob::deserialize(payload)?),
            ObjectType::Tree => Object::Tree(Tree::deserialize(payload)?),
            ObjectType::Commit => Object::Commit(Commit::deserialize(payload)?),
        })
    }

    fn as_packable(&self) -> &dyn Packable {
        match self {
            Object::Blob(blob) => blob,
            Object::Tree(tree) => tree,
            Object::Commit(commit) => commit,
        }
    }

    /// Human-readable rendering used by `load-object`
    pub fn display(&self) -> String {
        match self {
            Object::Blob(blob) => blob.display(),
            Object::Tree(tree) => tree.display(),
            Object::Commit(commit) => commit.display(),
        }
    }
}

impl Packable for Object {
    fn object_type(&self) -> ObjectType {
        self.as_packable().object_type()
    }

    fn payload(&self) -> &Bytes {
        self.as_packable().payload()
    }

    fn object_id(&self) -> &ObjectId {
        self.as_packable().object_id()
    }
}

impl From<Blob> for Object {
    fn from(blob: Blob) -> Self {
        Object::Blob(blob)
    }
}

impl From<Tree> for Object {
    fn from(tree: Tree) -> Self {
        Object::Tree(tree)
    }
}

impl From<Commit> for Object {
    fn from(commit: Commit) -> Self {
        Object::Commit(commit)
    }
}
