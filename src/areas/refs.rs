//! References (HEAD and branches)
//!
//! A ref file holds either a commit id followed by a newline, or a symbolic
//! pointer `ref: <path>` naming another ref relative to `.git`. HEAD is
//! normally symbolic (`ref: refs/heads/main`); a HEAD holding an id is
//! detached.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use file_guard::Lock;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

const SYMREF_PREFIX: &str = "ref: ";

/// Symbolic refs nested deeper than this are treated as a loop
const MAX_SYMREF_DEPTH: usize = 8;

pub const HEAD_REF_NAME: &str = "HEAD";

#[derive(Debug)]
pub struct Refs {
    /// Path to the git directory (typically `.git`)
    path: Box<Path>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum RefContent {
    SymRef(String),
    Oid(ObjectId),
}

impl RefContent {
    fn read(path: &Path) -> Result<Option<RefContent>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        match content.strip_prefix(SYMREF_PREFIX) {
            Some(target) => Ok(Some(RefContent::SymRef(target.trim().to_string()))),
            None => Ok(Some(RefContent::Oid(ObjectId::try_parse(content)?))),
        }
    }
}

impl Refs {
    pub fn new(path: Box<Path>) -> Self {
        Refs { path }
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }

    /// The commit HEAD resolves to, or `None` before the first commit
    pub fn current_head(&self) -> Result<Option<ObjectId>> {
        let target = self.resolve(&self.head_path())?;

        match RefContent::read(&target)? {
            Some(RefContent::Oid(oid)) => Ok(Some(oid)),
            Some(RefContent::SymRef(_)) | None => Ok(None),
        }
    }

    /// The branch HEAD points at, or `None` when HEAD is detached
    pub fn current_branch(&self) -> Result<Option<BranchName>> {
        let target = self.resolve(&self.head_path())?;

        Ok(target
            .strip_prefix(&self.path)
            .ok()
            .and_then(|relative| BranchName::from_ref_path(&Self::ref_name(relative))))
    }

    pub fn read_branch(&self, branch: &BranchName) -> Result<Option<ObjectId>> {
        match RefContent::read(&self.path.join(branch.to_ref_path()))? {
            Some(RefContent::Oid(oid)) => Ok(Some(oid)),
            Some(RefContent::SymRef(_)) | None => Ok(None),
        }
    }

    pub fn update_branch(&self, branch: &BranchName, oid: &ObjectId) -> Result<()> {
        let branch_path = self.path.join(branch.to_ref_path());
        self.update_ref_file(&branch_path, &format!("{oid}\n"))?;
        tracing::debug!(branch = %branch, oid = %oid, "branch updated");

        Ok(())
    }

    /// Point whatever HEAD resolves to at `oid`
    ///
    /// With a symbolic HEAD the final ref in the chain is written; a detached
    /// HEAD is rewritten in place.
    pub fn update_head(&self, oid: &ObjectId) -> Result<()> {
        let target = self.resolve(&self.head_path())?;
        self.update_ref_file(&target, &format!("{oid}\n"))?;
        tracing::debug!(target = %target.display(), oid = %oid, "HEAD updated");

        Ok(())
    }

    /// Make HEAD a symbolic ref to `branch`
    pub fn set_head(&self, branch: &BranchName) -> Result<()> {
        self.update_ref_file(
            &self.head_path(),
            &format!("{SYMREF_PREFIX}{}\n", branch.to_ref_path()),
        )
    }

    /// Follow symbolic refs starting at `path` down to the file holding an id
    ///
    /// The returned path may not exist yet (an unborn branch).
    fn resolve(&self, path: &Path) -> Result<PathBuf> {
        let mut current = path.to_path_buf();

        for _ in 0..MAX_SYMREF_DEPTH {
            match RefContent::read(&current)? {
                Some(RefContent::SymRef(target)) => current = self.path.join(target),
                Some(RefContent::Oid(_)) | None => return Ok(current),
            }
        }

        Err(Error::InvalidRef {
            path: path.to_path_buf(),
            reason: format!("symbolic ref chain deeper than {MAX_SYMREF_DEPTH}"),
        })
    }

    fn update_ref_file(&self, path: &Path, content: &str) -> Result<()> {
        let parent = path.parent().ok_or_else(|| Error::InvalidRef {
            path: path.to_path_buf(),
            reason: "ref has no parent directory".to_string(),
        })?;
        std::fs::create_dir_all(parent)?;

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        let file: &mut File = &mut lock;
        file.set_len(0)?;
        file.write_all(content.as_bytes())?;

        Ok(())
    }

    fn ref_name(relative: &Path) -> String {
        relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}
