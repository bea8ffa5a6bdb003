use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::fs::{self, DirEntry};

use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::ext::PathNameExt;
use crate::tree::TreeNode;

/// Reads a real directory subtree into a [`TreeNode`].
///
/// Entry names in the exclusion set are dropped at every directory level.
/// Individual entries that fail to enumerate are skipped; only an
/// unreadable root aborts the build.
pub struct TreeBuilder {
    ignore: HashSet<String>,
}

impl TreeBuilder {
    pub fn new<I, S>(ignore: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignore: ignore.into_iter().map(Into::into).collect(),
        }
    }

    pub fn build(&self, root: &Path) -> Result<TreeNode, TreeBuildError> {
        let children = self.read_children(root).context(ReadRootSnafu {
            path: root.to_path_buf(),
        })?;
        Ok(TreeNode::directory(root.tree_name(), children))
    }

    fn read_children(&self, dir: &Path) -> io::Result<Vec<TreeNode>> {
        let mut children = Vec::new();
        for entry in fs::read_dir(dir)? {
            match self.read_entry(entry) {
                Ok(Some(node)) => children.push(node),
                Ok(None) => {}
                Err(error) => {
                    debug!("Skipping unreadable entry in {}: {}", dir.display(), error);
                }
            }
        }
        // Stable partition: directories first, enumeration order kept within each group
        children.sort_by_key(TreeNode::is_file);
        Ok(children)
    }

    fn read_entry(&self, entry: io::Result<DirEntry>) -> io::Result<Option<TreeNode>> {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if self.ignore.contains(&name) {
            return Ok(None);
        }

        let node = if entry.file_type()?.is_dir() {
            let children = self.read_children(&entry.path()).unwrap_or_else(|error| {
                debug!(
                    "Skipping contents of {}: {}",
                    entry.path().display(),
                    error
                );
                Vec::new()
            });
            TreeNode::directory(name, children)
        } else {
            TreeNode::file(name)
        };
        Ok(Some(node))
    }
}

#[derive(Debug, Snafu)]
pub enum TreeBuildError {
    #[snafu(display("Failed to read directory {}", path.display()))]
    ReadRootError { path: PathBuf, source: io::Error },
}
