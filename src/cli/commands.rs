//! Normalized actions
//!
//! The command surface is a set of mutually exclusive flags rather than
//! subcommands; [`Action`] is what the flags boil down to.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    Add { path: PathBuf, name: Option<String> },
    Remove { key: String },
    List,
    Search { name: String },
}

impl Action {
    /// Whether this action rewrites the bookmark file
    pub(crate) fn is_mutating(&self) -> bool {
        matches!(self, Action::Add { .. } | Action::Remove { .. })
    }
}
