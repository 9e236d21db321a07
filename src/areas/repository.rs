use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::config::Config;
use crate::errors::{Error, Result};
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

pub const GIT_DIR: &str = ".git";

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: Arc<Mutex<Index>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    config: Config,
}

impl Repository {
    /// Open the repository whose work dir is `path`, creating the directory
    /// if needed
    ///
    /// Nothing under `.git` is touched; `init` lays it out.
    pub fn new(path: impl AsRef<Path>, writer: Box<dyn std::io::Write>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }
        let path = path.canonicalize()?;
        let git_path = path.join(GIT_DIR);

        let index = Index::new(git_path.join("index").into_boxed_path());
        let database = Database::new(git_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(git_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: Arc::new(Mutex::new(index)),
            database,
            workspace,
            refs,
            config: Config::from_env(),
        })
    }

    /// Open the repository containing `start`, walking up to the nearest
    /// directory that holds `.git`
    pub fn discover(start: impl AsRef<Path>, writer: Box<dyn std::io::Write>) -> Result<Self> {
        let start = start.as_ref();
        let root = Self::find_root(start).ok_or_else(|| Error::NotARepository {
            path: start.to_path_buf(),
        })?;
        tracing::debug!(root = %root.display(), "discovered repository");

        Self::new(root, writer)
    }

    fn find_root(start: &Path) -> Option<PathBuf> {
        let start = start.canonicalize().ok()?;

        start
            .ancestors()
            .find(|dir| dir.join(GIT_DIR).is_dir())
            .map(Path::to_path_buf)
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn git_path(&self) -> PathBuf {
        self.path.join(GIT_DIR)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> Arc<Mutex<Index>> {
        self.index.clone()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
