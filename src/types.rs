use serde::{Deserialize, Serialize};

use crate::error::TreeError;

/// Whether a node is a directory or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Directory,
    File,
}

/// One entry of a directory tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// The final path segment. Empty for a filesystem root.
    pub name: String,
    /// The absolute path of the entry.
    pub path: String,
    /// Directory or file, serialized under the `type` key.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// File length in bytes, `0` for directories.
    pub size: u64,
    /// Direct children in ascending path order.
    ///
    /// Only populated for directories above the depth bound whose listing
    /// succeeded.
    pub children: Vec<TreeNode>,
    /// Set when listing this node (or reading its metadata) failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TreeNode {
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }
}

/// The result of a tree build: either a tree or a single error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeResponse {
    Node(TreeNode),
    Error { error: String },
}

impl TreeResponse {
    pub fn error(message: impl Into<String>) -> Self {
        TreeResponse::Error {
            error: message.into(),
        }
    }

    pub fn node(&self) -> Option<&TreeNode> {
        match self {
            TreeResponse::Node(node) => Some(node),
            TreeResponse::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            TreeResponse::Node(_) => None,
            TreeResponse::Error { error } => Some(error),
        }
    }
}

impl From<TreeNode> for TreeResponse {
    fn from(node: TreeNode) -> Self {
        TreeResponse::Node(node)
    }
}

impl From<TreeError> for TreeResponse {
    fn from(err: TreeError) -> Self {
        TreeResponse::error(err.to_string())
    }
}
