use crate::engine::build_tree;
use crate::types::TreeResponse;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeOptions {
    pub root: PathBuf,
    pub max_depth: usize,
    pub show_hidden: bool,
    pub exclude_patterns: Vec<String>,
}
impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("~"),
            max_depth: 3,
            show_hidden: false,
            exclude_patterns: Vec::new(),
        }
    }
}
#[derive(Debug, Default)]
pub struct TreeBuilder {
    options: TreeOptions,
}
impl TreeBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: TreeOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = depth;
        self
    }
    pub fn show_hidden(mut self, yes: bool) -> Self {
        self.options.show_hidden = yes;
        self
    }
    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.exclude_patterns = patterns;
        self
    }
    pub fn options(self) -> TreeOptions {
        self.options
    }
    pub fn build(self) -> TreeResponse {
        build_tree(&self.options)
    }
}
