use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Packable;
use crate::artifacts::objects::tree::Tree;
use crate::artifacts::tree_builder::build_tree;
use crate::errors::Result;

impl Repository {
    /// Store the tree hierarchy for the current index and return its root
    pub async fn write_tree(&self) -> Result<Tree> {
        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        let root = build_tree(index.entries(), |tree| {
            self.database().store(tree).map(|_| ())
        })?;
        self.database().store(&root)?;

        Ok(root)
    }

    /// Commit the index on top of HEAD and advance HEAD to the new commit
    ///
    /// Objects are written before the ref, so a failure part way leaves
    /// unreferenced objects behind but never a ref to a missing commit.
    pub async fn write_commit(&self, message: &str, author: &str) -> Result<Commit> {
        let tree = self.write_tree().await?;
        let parent = self.refs().current_head()?;

        let commit = Commit::new(
            tree.object_id().clone(),
            parent,
            author.to_string(),
            message.to_string(),
            self.config().commit_timestamp(),
        )?;
        self.database().store(&commit)?;
        self.refs().update_head(commit.object_id())?;

        tracing::info!(
            oid = %commit.object_id(),
            tree = %tree.object_id(),
            parent = ?commit.parent().map(ToString::to_string),
            "created commit"
        );

        Ok(commit)
    }
}
