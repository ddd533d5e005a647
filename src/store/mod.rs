//! Bookmark persistence and collision bookkeeping

pub(crate) mod annotate;
pub(crate) mod file;
pub(crate) mod ops;
pub(crate) mod types;

pub(crate) use ops::BookmarkStore;
pub(crate) use types::Bookmark;
