//! Normalization of the caller-supplied root path.
//!
//! The root goes through two steps before any traversal: a leading `~` is
//! expanded to the home directory, then the result is made absolute and
//! canonical. Canonicalization is lenient so that a missing path still
//! produces an absolute path to report back.

use crate::error::TreeError;
use std::env;
use std::path::{Component, Path, PathBuf};

/// Returns the current user's home directory from `HOME` (or `USERPROFILE`).
pub fn home_dir() -> Option<PathBuf> {
    ["HOME", "USERPROFILE"]
        .into_iter()
        .filter_map(env::var_os)
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Expands a leading `~` component to the home directory.
///
/// Only a bare `~` component is expanded; `~user` forms are kept literally.
pub fn expand_home(path: &Path) -> Result<PathBuf, TreeError> {
    expand_home_with(path, home_dir)
}

fn expand_home_with(
    path: &Path,
    home: impl FnOnce() -> Option<PathBuf>,
) -> Result<PathBuf, TreeError> {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => {
            let home = home().ok_or(TreeError::HomeDirUnavailable)?;
            let rest = components.as_path();
            if rest.as_os_str().is_empty() {
                Ok(home)
            } else {
                Ok(home.join(rest))
            }
        }
        _ => Ok(path.to_path_buf()),
    }
}

/// Resolves `path` to an absolute path with symlinks, `.` and `..` removed.
///
/// Components are applied in order. After each one the prefix built so far is
/// canonicalized when it exists, so a `..` always steps out of the real
/// directory a symlink points to. Past the last existing component the rest is
/// applied lexically. The returned path therefore may not exist.
pub fn resolve(path: &Path) -> Result<PathBuf, TreeError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map_err(|e| TreeError::io(path, e))?
            .join(path)
    };
    if let Ok(canonical) = absolute.canonicalize() {
        return Ok(canonical);
    }

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => {
                resolved.push(name);
                if let Ok(canonical) = resolved.canonicalize() {
                    resolved = canonical;
                }
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    Ok(resolved)
}
