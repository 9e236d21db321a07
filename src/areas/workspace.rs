use crate::artifacts::index::entry_mode::EntryMode;
use crate::artifacts::index::index_entry::PATH_SEPARATOR;
use crate::artifacts::objects::blob::Blob;
use crate::errors::{Error, Result};
use chrono::{DateTime, FixedOffset, Local};
use is_executable::IsExecutable;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 3] = [".git", ".", ".."];

/// Stat information recorded in index entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStat {
    pub mode: EntryMode,
    pub size: u64,
    pub mod_time: DateTime<FixedOffset>,
}

/// The working directory a repository tracks
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a work-dir relative file into a blob
    pub fn parse_blob(&self, file_path: &str) -> Result<Blob> {
        let data = std::fs::read(self.absolute(file_path))
            .map_err(|err| self.not_found_or(err, file_path))?;

        Ok(Blob::new(data))
    }

    pub fn stat_file(&self, file_path: &str) -> Result<FileStat> {
        let absolute = self.absolute(file_path);
        let metadata =
            std::fs::metadata(&absolute).map_err(|err| self.not_found_or(err, file_path))?;

        Ok(FileStat {
            mode: EntryMode::from_executable(absolute.is_executable()),
            size: metadata.len(),
            mod_time: DateTime::<Local>::from(metadata.modified()?).fixed_offset(),
        })
    }

    /// Expand a work-dir relative path into the files it designates
    ///
    /// A file yields its normalized path; a directory yields every file
    /// beneath it (skipping `.git`), sorted by path.
    pub fn list_files(&self, file_path: &str) -> Result<Vec<String>> {
        let file_path = self.normalize(file_path)?;
        let absolute = self.absolute(&file_path);

        if !absolute.exists() {
            return Err(Error::FileNotFound {
                path: PathBuf::from(file_path),
            });
        }

        if !absolute.is_dir() {
            return Ok(vec![file_path]);
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&absolute)
            .into_iter()
            .filter_entry(|entry| !Self::is_ignored(entry.path()))
        {
            let entry = entry.map_err(std::io::Error::from)?;
            if entry.file_type().is_file() {
                files.push(self.relative_path(entry.path())?);
            }
        }
        files.sort();

        Ok(files)
    }

    /// Canonical form of a work-dir relative path: `/`-separated, without
    /// empty or `.` segments
    ///
    /// A `..` segment is rejected rather than resolved.
    pub fn normalize(&self, file_path: &str) -> Result<String> {
        let mut segments = Vec::new();

        for segment in file_path.split(PATH_SEPARATOR) {
            match segment {
                "" | "." => {}
                ".." => {
                    return Err(Error::OutsideRepository {
                        path: PathBuf::from(file_path),
                        root: self.path.to_path_buf(),
                    });
                }
                segment => segments.push(segment),
            }
        }

        Ok(segments.join("/"))
    }

    /// Turn any path (absolute or relative to the process) into a
    /// `/`-separated path relative to the work dir
    pub fn relative_path(&self, path: &Path) -> Result<String> {
        let absolute = path.canonicalize().map_err(|err| match err.kind() {
            ErrorKind::NotFound => Error::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => err.into(),
        })?;

        let relative =
            absolute
                .strip_prefix(&self.path)
                .map_err(|_| Error::OutsideRepository {
                    path: path.to_path_buf(),
                    root: self.path.to_path_buf(),
                })?;

        Ok(relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/"))
    }

    fn absolute(&self, file_path: &str) -> PathBuf {
        file_path
            .split(PATH_SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .fold(self.path.to_path_buf(), |path, segment| path.join(segment))
    }

    fn is_ignored(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| IGNORED_PATHS.contains(&name))
    }

    fn not_found_or(&self, err: std::io::Error, file_path: &str) -> Error {
        match err.kind() {
            ErrorKind::NotFound => Error::FileNotFound {
                path: PathBuf::from(file_path),
            },
            _ => err.into(),
        }
    }
}
