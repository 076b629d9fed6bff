//! Project root resolution.

use crate::core::error::PushgateError;
use std::path::{Path, PathBuf};

/// Nearest ancestor of `start` (inclusive) holding a `.git` entry.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

/// Resolve the directory every scan and command runs against.
///
/// An explicit root wins and must be a directory. Otherwise the enclosing
/// git checkout, falling back to `cwd` itself.
pub fn resolve_root(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf, PushgateError> {
    match explicit {
        Some(root) => {
            let root = if root.is_absolute() {
                root.to_path_buf()
            } else {
                cwd.join(root)
            };
            if !root.is_dir() {
                return Err(PushgateError::PathError(format!(
                    "project root {} is not a directory",
                    root.display()
                )));
            }
            Ok(root)
        }
        None => Ok(find_project_root(cwd).unwrap_or_else(|| cwd.to_path_buf())),
    }
}
