use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

use crate::error::AppError;

/// Make `input` absolute against the current directory and clean it lexically.
///
/// Symlinks are not resolved and the path does not have to exist.
pub(crate) fn absolutize(input: &Path) -> Result<PathBuf, AppError> {
    if input.as_os_str().is_empty() {
        return Err(AppError::InvalidPath {
            input: String::new(),
            reason: "path is empty".to_string(),
        });
    }
    let joined = std::path::absolute(input).map_err(|e| AppError::InvalidPath {
        input: input.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(clean(&joined))
}

/// Drop `.` components and fold `..` into its parent without touching the filesystem
pub(crate) fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Path rendered with forward slashes regardless of platform
pub(crate) fn to_slash(path: &Path) -> String {
    let display = path.to_string_lossy();
    if MAIN_SEPARATOR == '/' {
        display.into_owned()
    } else {
        display.replace(MAIN_SEPARATOR, "/")
    }
}

/// Final path segment, used as the default bookmark name.
/// A root path has no segment and is returned whole.
pub(crate) fn default_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => to_slash(path),
    }
}
