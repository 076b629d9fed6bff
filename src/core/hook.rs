//! Git pre-push hook management.
//!
//! The hook is a symbolic link from `.git/hooks/pre-push` to the pushgate
//! executable. When invoked under that name the binary runs the standard
//! check and ignores the remote arguments git passes.

use crate::core::error::PushgateError;
use std::fs;
use std::path::{Path, PathBuf};

pub const HOOK_NAME: &str = "pre-push";

/// Directory git reads hooks from.
///
/// `.git` is either the repository directory or, in worktrees and
/// submodules, a file holding `gitdir: <path>`. Worktrees share the hooks of
/// the common directory named by their `commondir` file.
pub fn hooks_dir(root: &Path) -> Result<PathBuf, PushgateError> {
    let dot_git = root.join(".git");
    let git_dir = if dot_git.is_dir() {
        dot_git
    } else if dot_git.is_file() {
        let content = fs::read_to_string(&dot_git)?;
        let target = content
            .lines()
            .find_map(|line| line.strip_prefix("gitdir:"))
            .map(str::trim)
            .ok_or_else(|| {
                PushgateError::HookError(format!(
                    "{} has no gitdir line",
                    dot_git.display()
                ))
            })?;
        root.join(target)
    } else {
        return Err(PushgateError::HookError(format!(
            "{} not found. Are you in the root of the project?",
            dot_git.display()
        )));
    };

    let common = git_dir.join("commondir");
    if common.is_file() {
        let rel = fs::read_to_string(&common)?;
        return Ok(git_dir.join(rel.trim()).join("hooks"));
    }
    Ok(git_dir.join("hooks"))
}

/// True when `path` is a symlink resolving to `target`.
fn links_to(path: &Path, target: &Path) -> bool {
    match (fs::canonicalize(path), fs::canonicalize(target)) {
        (Ok(a), Ok(b)) => fs::symlink_metadata(path)
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false)
            && a == b,
        _ => false,
    }
}

#[cfg(unix)]
fn link(target: &Path, hook_path: &Path) -> Result<(), PushgateError> {
    std::os::unix::fs::symlink(target, hook_path)?;
    Ok(())
}

#[cfg(not(unix))]
fn link(_target: &Path, _hook_path: &Path) -> Result<(), PushgateError> {
    Err(PushgateError::HookError(
        "hook installation requires symbolic link support".into(),
    ))
}

/// Link `.git/hooks/pre-push` to `executable`. Returns the hook path.
///
/// An existing hook that is not already this link is left alone unless
/// `force` is set.
pub fn install_hook(root: &Path, executable: &Path, force: bool) -> Result<PathBuf, PushgateError> {
    let hooks = hooks_dir(root)?;
    fs::create_dir_all(&hooks)?;
    let hook_path = hooks.join(HOOK_NAME);

    if fs::symlink_metadata(&hook_path).is_ok() {
        if links_to(&hook_path, executable) {
            return Ok(hook_path);
        }
        if !force {
            return Err(PushgateError::HookError(format!(
                "{} already exists; use --force to replace it",
                hook_path.display()
            )));
        }
        fs::remove_file(&hook_path)?;
    }

    link(executable, &hook_path)?;
    Ok(hook_path)
}

/// Remove the hook if it is a symbolic link. Returns whether anything was removed.
pub fn uninstall_hook(root: &Path) -> Result<bool, PushgateError> {
    let hook_path = hooks_dir(root)?.join(HOOK_NAME);
    match fs::symlink_metadata(&hook_path) {
        Err(_) => Ok(false),
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::remove_file(&hook_path)?;
            Ok(true)
        }
        Ok(_) => Err(PushgateError::HookError(format!(
            "{} is not a pushgate link; remove it manually",
            hook_path.display()
        ))),
    }
}

/// Whether the binary was started through the hook link.
pub fn invoked_as_hook(argv0: &str) -> bool {
    Path::new(argv0)
        .file_name()
        .is_some_and(|name| name == HOOK_NAME)
}
