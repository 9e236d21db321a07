use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object::Packable;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::{Tree, TreeEntry};
use crate::errors::Result;
use std::collections::BTreeMap;

/// One directory level: child directories by name and the files directly inside
#[derive(Debug, Default)]
struct DirectoryNode {
    children: BTreeMap<String, usize>,
    files: Vec<IndexEntry>,
}

/// Flat arena of directory nodes addressed by index
///
/// Node 0 is the root. A child is always pushed after its parent, so walking
/// the arena backwards visits every directory after all of its subdirectories.
#[derive(Debug)]
pub struct DirectoryArena {
    nodes: Vec<DirectoryNode>,
}

impl DirectoryArena {
    pub const ROOT: usize = 0;

    pub fn from_entries<'e>(entries: impl IntoIterator<Item = &'e IndexEntry>) -> Self {
        let mut arena = DirectoryArena {
            nodes: vec![DirectoryNode::default()],
        };

        for entry in entries {
            let segments = entry.segments();
            let Some((_, dirs)) = segments.split_last() else {
                continue;
            };

            let node = dirs
                .iter()
                .fold(Self::ROOT, |parent, dir| arena.child_or_insert(parent, dir));
            arena.nodes[node].files.push(entry.clone());
        }

        arena
    }

    fn child_or_insert(&mut self, parent: usize, name: &str) -> usize {
        if let Some(&child) = self.nodes[parent].children.get(name) {
            return child;
        }

        let child = self.nodes.len();
        self.nodes.push(DirectoryNode::default());
        self.nodes[parent].children.insert(name.to_string(), child);

        child
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[Self::ROOT].files.is_empty() && self.nodes[Self::ROOT].children.is_empty()
    }

    /// Fold the arena bottom-up into trees
    ///
    /// `store` is called on every subtree as soon as it is built, before its
    /// parent. The root tree is returned without being passed to `store`.
    pub fn fold<F>(&self, mut store: F) -> Result<Tree>
    where
        F: FnMut(&Tree) -> Result<()>,
    {
        let mut built: Vec<Option<ObjectId>> = vec![None; self.nodes.len()];

        for index in (Self::ROOT + 1..self.nodes.len()).rev() {
            let tree = self.seal_node(index, &built)?;
            store(&tree)?;
            built[index] = Some(tree.object_id().clone());
        }

        self.seal_node(Self::ROOT, &built)
    }

    fn seal_node(&self, index: usize, built: &[Option<ObjectId>]) -> Result<Tree> {
        let node = &self.nodes[index];
        let subtrees = node
            .children
            .iter()
            .filter_map(|(name, &child)| built[child].as_ref().map(|oid| (name.as_str(), oid)));

        seal_level(&node.files, subtrees)
    }
}

/// Build one directory level from its files and already-built subdirectories
///
/// Files and directories are sorted together by name.
pub fn seal_level<'a>(
    files: &[IndexEntry],
    subtrees: impl IntoIterator<Item = (&'a str, &'a ObjectId)>,
) -> Result<Tree> {
    let entries = files
        .iter()
        .map(|file| TreeEntry::blob(file.basename(), file.hash.clone(), file.mode))
        .chain(
            subtrees
                .into_iter()
                .map(|(name, oid)| TreeEntry::tree(name, oid.clone())),
        )
        .collect::<Vec<_>>();

    Tree::new(entries)
}
