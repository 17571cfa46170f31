use crate::error::TreeError;
use crate::options::TreeOptions;
use crate::path::{expand_home, resolve};
use crate::types::{NodeKind, TreeNode, TreeResponse};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
struct Walker<'a> {
    options: &'a TreeOptions,
    root: PathBuf,
    matcher: Option<GlobSet>,
}
fn build_matcher(patterns: &[String]) -> Result<Option<GlobSet>, TreeError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut glob_builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob =
            Glob::new(pattern).map_err(|e| TreeError::Pattern(format!("'{}': {}", pattern, e)))?;
        glob_builder.add(glob);
    }
    glob_builder
        .build()
        .map(Some)
        .map_err(|e| TreeError::Pattern(format!("failed to build glob set: {}", e)))
}
impl<'a> Walker<'a> {
    fn new(options: &'a TreeOptions, root: PathBuf) -> Result<Self, TreeError> {
        let matcher = build_matcher(&options.exclude_patterns)?;
        Ok(Self {
            options,
            root,
            matcher,
        })
    }
    /// Exclude globs see the entry name and its path below the traversal
    /// root, never the root's own ancestors.
    fn is_listed(&self, name: &OsStr, path: &Path) -> bool {
        if !self.options.show_hidden && name.as_encoded_bytes().starts_with(b".") {
            return false;
        }
        match &self.matcher {
            Some(matcher) => {
                let relative = path.strip_prefix(&self.root).unwrap_or(Path::new(name));
                !(matcher.is_match(name) || matcher.is_match(relative))
            }
            None => true,
        }
    }
    /// Lists the direct children of `dir` that pass the filters.
    ///
    /// The set keys on the joined child path, which both drops duplicate
    /// entries and yields them in ascending path order.
    fn list(&self, dir: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut entries = BTreeSet::new();
        for entry in fs::read_dir(dir)? {
            let name = entry?.file_name();
            let path = dir.join(&name);
            if self.is_listed(&name, &path) {
                entries.insert(path);
            }
        }
        Ok(entries)
    }
    fn node(&self, path: &Path, depth: usize) -> Result<TreeNode, TreeError> {
        let metadata = fs::metadata(path).map_err(|e| TreeError::io(path, e))?;
        let kind = if metadata.is_dir() {
            NodeKind::Directory
        } else {
            NodeKind::File
        };
        let mut node = TreeNode {
            name: file_name(path),
            path: path.to_string_lossy().into_owned(),
            kind,
            size: if metadata.is_file() { metadata.len() } else { 0 },
            children: Vec::new(),
            error: None,
        };
        if kind == NodeKind::Directory && depth < self.options.max_depth {
            match self.list(path) {
                Ok(entries) => {
                    node.children = entries
                        .iter()
                        .map(|child| self.child(child, depth + 1))
                        .collect();
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to list directory");
                    node.error = Some(listing_error(&e));
                }
            }
        }
        Ok(node)
    }
    /// Builds a nested node, recording a metadata failure on the node itself.
    fn child(&self, path: &Path, depth: usize) -> TreeNode {
        self.node(path, depth).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read entry metadata");
            TreeNode {
                name: file_name(path),
                path: path.to_string_lossy().into_owned(),
                kind: NodeKind::File,
                size: 0,
                children: Vec::new(),
                error: Some(e.to_string()),
            }
        })
    }
}
fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
fn listing_error(err: &io::Error) -> String {
    if err.kind() == io::ErrorKind::PermissionDenied {
        "Permission denied".to_string()
    } else {
        err.to_string()
    }
}
/// Builds the tree for `options`, failing only when no root node can be formed.
///
/// Failures below the root are recorded on the affected node and never
/// returned as `Err`.
pub fn try_build_tree(options: &TreeOptions) -> Result<TreeNode, TreeError> {
    let root = resolve(&expand_home(&options.root)?)?;
    let walker = Walker::new(options, root.clone())?;
    tracing::debug!(
        root = %root.display(),
        max_depth = options.max_depth,
        show_hidden = options.show_hidden,
        "Building directory tree"
    );
    if !root.exists() {
        return Err(TreeError::NotFound { path: root });
    }
    walker.node(&root, 0)
}
/// Builds the tree for `options` as a response value.
///
/// Root-level failures become [`TreeResponse::Error`] with the failure's message.
pub fn build_tree(options: &TreeOptions) -> TreeResponse {
    match try_build_tree(options) {
        Ok(node) => TreeResponse::Node(node),
        Err(e) => {
            tracing::debug!(error = %e, "Tree build failed at the root");
            e.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_failure_has_fixed_message() {
        let err = io::Error::from(io::ErrorKind::PermissionDenied);
        assert_eq!(listing_error(&err), "Permission denied");
    }

    #[test]
    fn other_listing_failures_keep_their_message() {
        let err = io::Error::new(io::ErrorKind::NotADirectory, "Not a directory");
        assert_eq!(listing_error(&err), "Not a directory");
        let err = io::Error::from(io::ErrorKind::NotFound);
        assert_eq!(listing_error(&err), err.to_string());
    }

    #[test]
    fn exclude_globs_ignore_root_ancestors() {
        let options = TreeOptions {
            exclude_patterns: vec!["*test*".to_string(), "src/*.tmp".to_string()],
            ..TreeOptions::default()
        };
        let root = PathBuf::from("/work/testing-project");
        let walker = Walker::new(&options, root.clone()).unwrap();

        let listed = |relative: &str| {
            let path = root.join(relative);
            let name = path.file_name().unwrap().to_os_string();
            walker.is_listed(&name, &path)
        };
        assert!(listed("main.rs"));
        assert!(listed("src/lib.rs"));
        assert!(!listed("test_utils.rs"));
        assert!(!listed("src/scratch.tmp"));
        assert!(listed("other/scratch.tmp"));
    }
}
