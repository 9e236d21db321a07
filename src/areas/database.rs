//! Object database
//!
//! Objects live under `.git/objects/<id[0:2]>/<id[2:]>` as zlib-compressed
//! envelopes. Identical content maps to the same path, so storing it twice
//! is a no-op.

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Packable, parse_envelope};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::errors::{Error, Result};
use bytes::Bytes;
use fake::rand;
use std::io::{BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn object_path(&self, object_id: &ObjectId) -> PathBuf {
        self.path.join(object_id.to_path())
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.object_path(object_id).exists()
    }

    /// Persist an object, returning its identifier
    pub fn store(&self, object: &impl Packable) -> Result<ObjectId> {
        let object_id = object.object_id().clone();
        let object_path = self.object_path(&object_id);

        // write the object to disk unless it already exists
        if object_path.exists() {
            tracing::debug!(oid = %object_id, "object already stored");
            return Ok(object_id);
        }

        let object_dir = object_path
            .parent()
            .ok_or_else(|| Error::invalid_format(&object_id, "object path has no parent"))?;
        std::fs::create_dir_all(object_dir)?;

        self.write_object(&object_path, &object.envelope())?;
        tracing::debug!(
            oid = %object_id,
            kind = %object.object_type(),
            size = object.payload().len(),
            "stored object"
        );

        Ok(object_id)
    }

    pub fn load(&self, object_id: &ObjectId) -> Result<Object> {
        let (object_type, payload) = self.read_envelope(object_id)?;

        Object::deserialize(object_type, payload)
    }

    pub fn load_commit(&self, object_id: &ObjectId) -> Result<Commit> {
        match self.load(object_id)? {
            Object::Commit(commit) => Ok(commit),
            other => Err(Self::unexpected(object_id, ObjectType::Commit, &other)),
        }
    }

    pub fn load_tree(&self, object_id: &ObjectId) -> Result<Tree> {
        match self.load(object_id)? {
            Object::Tree(tree) => Ok(tree),
            other => Err(Self::unexpected(object_id, ObjectType::Tree, &other)),
        }
    }

    fn unexpected(object_id: &ObjectId, expected: ObjectType, actual: &Object) -> Error {
        Error::UnexpectedObjectType {
            oid: object_id.to_string(),
            expected: expected.to_string(),
            actual: actual.object_type().to_string(),
        }
    }

    fn read_envelope(&self, object_id: &ObjectId) -> Result<(ObjectType, Bytes)> {
        let object_path = self.object_path(object_id);

        let compressed = match std::fs::read(&object_path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(Error::ObjectNotFound {
                    oid: object_id.to_string(),
                });
            }
            Err(err) => return Err(err.into()),
        };

        let mut decoder = flate2::read::ZlibDecoder::new(compressed.as_slice());
        let mut envelope = Vec::new();
        decoder.read_to_end(&mut envelope).map_err(|err| {
            Error::invalid_format(object_id, format!("unable to decompress object: {err}"))
        })?;

        parse_envelope(object_id, Bytes::from(envelope))
    }

    fn write_object(&self, object_path: &Path, envelope: &[u8]) -> Result<()> {
        let object_dir = object_path
            .parent()
            .ok_or_else(|| std::io::Error::other("object path has no parent"))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)?;

        let mut encoder =
            flate2::write::ZlibEncoder::new(BufWriter::new(file), flate2::Compression::default());
        let written = encoder
            .write_all(envelope)
            .and_then(|_| encoder.finish())
            .and_then(|mut writer| writer.flush());

        if let Err(err) = written {
            let _ = std::fs::remove_file(&temp_object_path);
            return Err(err.into());
        }

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, object_path)?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
