//! Internal module for rendering a [`TreeNode`] as text.

use crate::types::TreeNode;

/// Renders a visual tree string, similar to the `tree` command.
///
/// The root line carries the root's absolute path. Entries with an error get
/// the message appended in brackets.
pub(crate) fn render_tree(root: &TreeNode) -> String {
    let mut lines = Vec::new();
    lines.push(format!(".  # {}", root.path));
    if let Some(error) = &root.error {
        lines.push(format!("[{}]", error));
    }
    render_children(root, "", &mut lines);
    lines.join("\n")
}

fn render_children(node: &TreeNode, prefix: &str, lines: &mut Vec<String>) {
    let count = node.children.len();
    for (index, child) in node.children.iter().enumerate() {
        let last = index + 1 == count;
        let branch = if last { "└── " } else { "├── " };
        let mut line = format!("{}{}{}", prefix, branch, child.name);
        if child.is_dir() {
            line.push('/');
        }
        if let Some(error) = &child.error {
            line.push_str(&format!("  [{}]", error));
        }
        lines.push(line);
        let nested = format!("{}{}", prefix, if last { "    " } else { "│   " });
        render_children(child, &nested, lines);
    }
}
