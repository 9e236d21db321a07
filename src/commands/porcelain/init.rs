use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::index::EMPTY_INDEX;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    /// Lay out `.git` with `branch` as the initial branch
    ///
    /// Running it again on an existing repository only fills in what is
    /// missing; HEAD and the index are left alone.
    pub async fn init(&self, branch: &BranchName) -> anyhow::Result<()> {
        let reinitialized = self.git_path().is_dir();

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .git/objects directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .git/refs/heads directory")?;

        if !self.refs().head_path().exists() {
            self.refs()
                .set_head(branch)
                .context("Failed to create initial HEAD reference")?;
        }

        let index = self.index();
        let index = index.lock().await;
        // create the index file if it does not exist
        if !index.path().exists() {
            fs::write(index.path(), EMPTY_INDEX).context("Failed to create .git/index file")?;
        }

        let verb = if reinitialized {
            "Reinitialized existing"
        } else {
            "Initialized empty"
        };
        tracing::info!(path = %self.git_path().display(), reinitialized, "initialized repository");
        writeln!(
            self.writer(),
            "{verb} Git repository in {}",
            self.git_path().display()
        )?;

        Ok(())
    }
}
