use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::annotate::{base_name, is_annotated};

/// A named filesystem path as stored in bookmarks.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Bookmark {
    /// Display name, possibly annotated with " <= <path>"
    pub(crate) name: String,
    /// Absolute, lexically cleaned path
    pub(crate) path: PathBuf,
}

impl Bookmark {
    pub(crate) fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    pub(crate) fn base_name(&self) -> &str {
        base_name(&self.name)
    }

    pub(crate) fn is_annotated(&self) -> bool {
        is_annotated(&self.name)
    }
}
