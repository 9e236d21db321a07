use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::{RevList, RevListIntoIter};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Packable;
use crate::errors::Result;
use std::io::Write;

impl Repository {
    /// Commits reachable from HEAD, newest first, at most `limit` of them
    pub fn log(&self, limit: Option<usize>) -> Result<RevListIntoIter<'_>> {
        let head = self.refs().current_head()?;

        Ok(RevList::new(self.database(), head, limit).into_iter())
    }

    pub fn show_log(&self, limit: Option<usize>) -> anyhow::Result<()> {
        for (position, commit) in self.log(limit)?.enumerate() {
            if position > 0 {
                writeln!(self.writer())?;
            }
            self.show_commit_medium(&commit?)?;
        }

        Ok(())
    }

    fn show_commit_medium(&self, commit: &Commit) -> anyhow::Result<()> {
        let mut writer = self.writer();

        writeln!(writer, "commit {}", commit.object_id())?;
        writeln!(writer, "Author: {}", commit.author())?;
        writeln!(writer, "Date:   {}", commit.readable_timestamp())?;
        writeln!(writer)?;
        for message_line in commit.message().lines() {
            writeln!(writer, "    {}", message_line)?;
        }

        Ok(())
    }
}
