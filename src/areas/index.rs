//! Staging area
//!
//! The index is a JSON array of [`IndexEntry`] kept at `.git/index`. Entries
//! keep the order in which they were staged; restaging a path moves it to the
//! end.
//!
//! ## Locking
//!
//! [`Index::update`] is the only read-modify-write path. It holds an exclusive
//! lock on the index file from the moment the entries are read until the new
//! content is written back.

use crate::artifacts::index::index_entry::IndexEntry;
use crate::errors::Result;
use file_guard::Lock;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.git/index`)
    path: Box<Path>,
    entries: Vec<IndexEntry>,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn entry_by_path(&self, path: &str) -> Option<&IndexEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    /// Read the persisted entries
    ///
    /// A missing or empty index file reads as no entries.
    pub fn read(&self) -> Result<Vec<IndexEntry>> {
        let mut index_file = match std::fs::OpenOptions::new().read(true).open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        let mut lock = file_guard::lock(&mut index_file, Lock::Shared, 0, 1)?;
        let file: &mut File = &mut lock;

        let mut content = String::new();
        file.read_to_string(&mut content)?;

        Self::parse(&content)
    }

    /// Overwrite the index file with `entries`
    ///
    /// The file is only truncated once the exclusive lock is held.
    pub fn write(&self, entries: &[IndexEntry]) -> Result<()> {
        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)?;
        let mut lock = file_guard::lock(&mut index_file, Lock::Exclusive, 0, 1)?;
        let file: &mut File = &mut lock;
        file.set_len(0)?;

        Self::write_entries(file, entries)
    }

    /// Load the persisted entries into memory
    pub fn rehydrate(&mut self) -> Result<()> {
        self.entries = self.read()?;

        Ok(())
    }

    /// Stage `entry`, replacing any entry it conflicts with
    ///
    /// Besides an entry with the same path, this drops entries nested under
    /// the new path and entries whose path is one of its parent directories.
    pub fn add(&mut self, entry: IndexEntry) {
        let parents = entry.parent_dirs();

        self.entries.retain(|existing| {
            existing.path != entry.path
                && !existing.is_under(&entry.path)
                && !parents.contains(&existing.path)
        });
        self.entries.push(entry);
    }

    /// Run `f` against the freshly read entries and persist the result
    pub fn update<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let mut index_file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)?;
        let mut lock = file_guard::lock(&mut index_file, Lock::Exclusive, 0, 1)?;
        let file: &mut File = &mut lock;

        let mut content = String::new();
        file.read_to_string(&mut content)?;
        self.entries = Self::parse(&content)?;

        let result = f(self)?;

        file.set_len(0)?;
        file.seek(SeekFrom::Start(0))?;
        Self::write_entries(file, &self.entries)?;
        tracing::debug!(path = %self.path.display(), entries = self.entries.len(), "index updated");

        Ok(result)
    }

    fn parse(content: &str) -> Result<Vec<IndexEntry>> {
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(content)?)
    }

    fn write_entries(mut writer: impl Write, entries: &[IndexEntry]) -> Result<()> {
        serde_json::to_writer(&mut writer, entries)?;
        writer.flush()?;

        Ok(())
    }
}
