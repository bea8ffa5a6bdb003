use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use tracing::debug;

use crate::tree::TreeNode;

/// Creates the skeleton described by `node` under `base`: a directory per
/// branch, an empty file per leaf.
///
/// Every per-entry creation failure, "already exists" included, is logged
/// and discarded so one failing entry never blocks its siblings or
/// unrelated subtrees.
pub fn materialize(node: &TreeNode, base: &Path) {
    let path = base.join(node.name());
    match node {
        TreeNode::File { .. } => {
            if let Err(error) = create_empty_file(&path) {
                debug!("Failed to create file {}: {}", path.display(), error);
            }
        }
        TreeNode::Directory { children, .. } => {
            if let Err(error) = fs::create_dir(&path) {
                debug!("Failed to create directory {}: {}", path.display(), error);
            }
            for child in children {
                materialize(child, &path);
            }
        }
    }
}

// Create without truncate, so a pre-existing file keeps its content.
fn create_empty_file(path: &Path) -> io::Result<()> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .open(path)
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::tree::TreeBuilder;

    fn fixture_tree() -> TreeNode {
        TreeNode::directory(
            "folder",
            vec![
                TreeNode::directory(
                    "subfolder1",
                    vec![TreeNode::file("file1"), TreeNode::file("file2")],
                ),
                TreeNode::directory("subfolder2", vec![]),
                TreeNode::file("file3"),
            ],
        )
    }

    #[test]
    fn creates_the_full_skeleton() {
        let base = tempdir().unwrap();
        materialize(&fixture_tree(), base.path());

        assert!(base.path().join("folder").is_dir());
        assert!(base.path().join("folder/subfolder1").is_dir());
        assert!(base.path().join("folder/subfolder1/file1").is_file());
        assert!(base.path().join("folder/subfolder1/file2").is_file());
        assert!(base.path().join("folder/subfolder2").is_dir());
        assert!(base.path().join("folder/file3").is_file());
        assert_eq!(fs::read(base.path().join("folder/file3")).unwrap(), b"");
    }

    #[test]
    fn rerun_keeps_existing_content() {
        let base = tempdir().unwrap();
        materialize(&fixture_tree(), base.path());
        fs::write(base.path().join("folder/file3"), b"kept").unwrap();

        materialize(&fixture_tree(), base.path());

        assert_eq!(fs::read(base.path().join("folder/file3")).unwrap(), b"kept");
    }

    #[test]
    fn failing_entry_does_not_block_siblings() {
        let base = tempdir().unwrap();
        fs::create_dir(base.path().join("root")).unwrap();
        fs::write(base.path().join("root/folder"), b"occupied").unwrap();

        let tree = TreeNode::directory(
            "root",
            vec![
                TreeNode::directory("folder", vec![TreeNode::file("inner")]),
                TreeNode::file("after"),
            ],
        );
        materialize(&tree, base.path());

        assert!(base.path().join("root/folder").is_file());
        assert!(base.path().join("root/after").is_file());
    }

    fn normalized(node: &TreeNode) -> TreeNode {
        match node {
            TreeNode::File { name } => TreeNode::file(name.clone()),
            TreeNode::Directory { name, children } => {
                let mut children: Vec<TreeNode> = children.iter().map(normalized).collect();
                children.sort_by(|a, b| a.name().cmp(b.name()));
                TreeNode::directory(name.clone(), children)
            }
        }
    }

    #[test]
    fn built_tree_round_trips_through_materialization() {
        let source = tempdir().unwrap();
        fs::create_dir(source.path().join("sub")).unwrap();
        fs::write(source.path().join("sub/one.txt"), b"content").unwrap();
        fs::write(source.path().join("two.txt"), b"content").unwrap();
        fs::create_dir(source.path().join("skipme")).unwrap();
        fs::write(source.path().join("skipme.txt"), b"").unwrap();

        let builder = TreeBuilder::new(["skipme"]);
        let original = builder.build(source.path()).unwrap();

        let target = tempdir().unwrap();
        materialize(&original, target.path());

        let rebuilt = builder
            .build(&target.path().join(original.name()))
            .unwrap();
        assert_eq!(normalized(&rebuilt), normalized(&original));
    }
}
