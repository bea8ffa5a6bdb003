use derive_more::IsVariant;

/// A filesystem-shaped tree value.
///
/// The leaf/branch distinction is carried by the variant, never by the
/// emptiness of `children`: a `Directory` with no children is still a
/// directory. Nodes own their children outright, so the structure is a
/// strict tree and consumers can recurse without a cycle check.
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum TreeNode {
    File {
        name: String,
    },
    Directory {
        name: String,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn file(name: impl Into<String>) -> Self {
        TreeNode::File { name: name.into() }
    }

    pub fn directory(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        TreeNode::Directory {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name } | TreeNode::Directory { name, .. } => name,
        }
    }
}
