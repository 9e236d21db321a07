use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Packable;
use anyhow::Context;
use std::path::Path;
use std::io::Write;

impl Repository {
    pub fn hash_object(&self, object_path: &Path, write: bool) -> anyhow::Result<()> {
        let object_data = std::fs::read(object_path)
            .with_context(|| format!("could not read {}", object_path.display()))?;
        let object = Blob::new(object_data);

        writeln!(self.writer(), "{}", object.object_id())?;

        // write (if write is true) as compressed object file
        if !write {
            return Ok(());
        }

        self.database()
            .store(&object)
            .with_context(|| format!("failed to store {}", object.object_id()))?;

        Ok(())
    }
}
