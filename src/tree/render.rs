use snafu::{Snafu, ensure};

use crate::tree::TreeNode;

const FOLDER_ICON: &str = "📁";
const FILE_ICON: &str = "📄";
const LAST_CONNECTOR: &str = "└─";
const BRANCH_CONNECTOR: &str = "├─";
const GUIDE_SEGMENT: &str = "│ ";
const BLANK_SEGMENT: &str = "  ";

/// Renders `node` and all of its descendants as an indented box-drawing
/// diagram, one line per node in depth-first pre-order, newline-separated
/// and without a trailing newline.
///
/// The root is treated as a last sibling and gets the corner connector.
/// Pure and deterministic: identical trees render to identical bytes.
pub fn render(node: &TreeNode) -> Result<String, RenderError> {
    render_forest(std::slice::from_ref(node))
}

/// Renders a sequence of sibling roots as a single diagram. Only the final
/// root gets the corner connector; the subtrees of earlier roots keep a
/// continuation guide running down their leftmost column.
pub fn render_forest(nodes: &[TreeNode]) -> Result<String, RenderError> {
    let mut out = String::new();
    for (index, node) in nodes.iter().enumerate() {
        let last = index + 1 == nodes.len();
        if index > 0 {
            out.push('\n');
        }
        let mut ancestors = vec![!last];
        render_into(node, last, &mut ancestors, &mut out)?;
    }
    Ok(out)
}

/// `ancestors` holds one flag per level above `node`: `true` means that
/// ancestor still has siblings below this line, so its column draws a
/// vertical guide instead of blank filler.
fn render_into(
    node: &TreeNode,
    last: bool,
    ancestors: &mut Vec<bool>,
    out: &mut String,
) -> Result<(), RenderError> {
    ensure!(!node.name().is_empty(), EmptyNodeNameSnafu);

    out.push_str(if last { LAST_CONNECTOR } else { BRANCH_CONNECTOR });
    out.push_str(if node.is_directory() {
        FOLDER_ICON
    } else {
        FILE_ICON
    });
    out.push_str(node.name());

    if let TreeNode::Directory { children, .. } = node {
        let indent: String = ancestors
            .iter()
            .map(|&continues| if continues { GUIDE_SEGMENT } else { BLANK_SEGMENT })
            .collect();

        for (index, child) in children.iter().enumerate() {
            let child_last = index + 1 == children.len();
            out.push('\n');
            out.push_str(&indent);
            ancestors.push(!child_last);
            render_into(child, child_last, ancestors, out)?;
            ancestors.pop();
        }
    }

    Ok(())
}

#[derive(Debug, Snafu)]
pub enum RenderError {
    #[snafu(display("Encountered a tree node with an empty name"))]
    EmptyNodeNameError,
}
