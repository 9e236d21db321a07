use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object::Packable;
use crate::errors::Result;
use anyhow::Context;
use std::path::PathBuf;

impl Repository {
    /// Stage one work-dir relative file
    pub async fn stage(&self, path: &str) -> Result<IndexEntry> {
        let index = self.index();
        let mut index = index.lock().await;

        index.update(|index| self.stage_file(index, path))
    }

    /// Stage work-dir relative paths, expanding directories into their files
    pub async fn stage_paths(&self, paths: &[String]) -> Result<Vec<IndexEntry>> {
        // Expand everything first so a missing path stages nothing
        let files = paths
            .iter()
            .map(|path| self.workspace().list_files(path))
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();

        let index = self.index();
        let mut index = index.lock().await;

        index.update(|index| {
            files
                .iter()
                .map(|file| self.stage_file(index, file))
                .collect()
        })
    }

    /// `add` as typed on the command line: paths are relative to the
    /// current directory
    pub async fn add(&self, paths: &[PathBuf]) -> anyhow::Result<()> {
        let paths = paths
            .iter()
            .map(|path| {
                self.workspace()
                    .relative_path(path)
                    .with_context(|| format!("pathspec '{}' did not match any files", path.display()))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let staged = self.stage_paths(&paths).await?;
        tracing::debug!(count = staged.len(), "staged files");

        Ok(())
    }

    fn stage_file(&self, index: &mut Index, path: &str) -> Result<IndexEntry> {
        let path = self.workspace().normalize(path)?;
        let blob = self.workspace().parse_blob(&path)?;
        let stat = self.workspace().stat_file(&path)?;

        let blob_id = self.database().store(&blob)?;
        let entry = IndexEntry::new(
            path,
            blob_id,
            stat.mode,
            stat.size,
            stat.mod_time,
            true,
        );
        index.add(entry.clone());
        tracing::debug!(path = %entry.path, oid = %blob.object_id(), mode = %entry.mode, "staged file");

        Ok(entry)
    }
}
