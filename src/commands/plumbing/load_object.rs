use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::io::Write;

impl Repository {
    /// Print a stored object: blob bytes as-is, trees and commits rendered
    pub fn load_object(&self, object_id: &str) -> anyhow::Result<()> {
        let object_id = ObjectId::try_parse(object_id)?;
        let object = self
            .database()
            .load(&object_id)
            .with_context(|| format!("failed to load object {object_id}"))?;

        let mut writer = self.writer();
        match &object {
            Object::Blob(blob) => writer.write_all(blob.content())?,
            Object::Tree(_) | Object::Commit(_) => writeln!(writer, "{}", object.display())?,
        }

        Ok(())
    }
}
