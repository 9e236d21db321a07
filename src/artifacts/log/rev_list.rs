use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use derive_new::new;

/// Commits reachable from `start`, newest first
#[derive(Debug, Clone, new)]
pub struct RevList<'d> {
    database: &'d Database,
    start: Option<ObjectId>,
    limit: Option<usize>,
}

impl<'d> IntoIterator for RevList<'d> {
    type Item = Result<Commit>;
    type IntoIter = RevListIntoIter<'d>;

    fn into_iter(self) -> Self::IntoIter {
        RevListIntoIter {
            database: self.database,
            current_commit_oid: self.start,
            remaining: self.limit,
        }
    }
}

/// Lazily loads one commit per step
///
/// A failed load is yielded once and ends the walk.
#[derive(Debug, Clone)]
pub struct RevListIntoIter<'d> {
    database: &'d Database,
    current_commit_oid: Option<ObjectId>,
    remaining: Option<usize>,
}

impl Iterator for RevListIntoIter<'_> {
    type Item = Result<Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == Some(0) {
            return None;
        }

        let commit_oid = self.current_commit_oid.take()?;
        self.remaining = self.remaining.map(|remaining| remaining - 1);

        match self.database.load_commit(&commit_oid) {
            Ok(commit) => {
                // Move to the parent commit for the next iteration
                self.current_commit_oid = commit.parent().cloned();
                Some(Ok(commit))
            }
            Err(err) => {
                self.remaining = Some(0);
                Some(Err(err))
            }
        }
    }
}
