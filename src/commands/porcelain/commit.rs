use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Packable;
use anyhow::Context;
use std::io::Write;

impl Repository {
    /// Commit the index as the configured author and print a summary line
    pub async fn commit(&self, message: &str) -> anyhow::Result<Commit> {
        let author = self.config().author().to_string();
        let commit = self
            .write_commit(message.trim(), &author)
            .await
            .context("failed to create commit")?;

        let branch = match self.refs().current_branch()? {
            Some(branch) => branch.to_string(),
            None => "detached HEAD".to_string(),
        };
        let root = if commit.parent().is_none() {
            " (root-commit)"
        } else {
            ""
        };

        writeln!(
            self.writer(),
            "[{branch}{root} {}] {}",
            commit.object_id().to_short_oid(),
            commit.short_message()
        )?;

        Ok(commit)
    }
}
