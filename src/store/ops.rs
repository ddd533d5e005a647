//! Store operations
//!
//! Each operation loads the file, works on the loaded list and, when the
//! list changed, writes it back in full.

use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::utils::{absolutize, debug_log, default_name};

use super::annotate::{insert, simplify};
use super::file::BookmarkFile;
use super::types::Bookmark;

pub(crate) struct BookmarkStore {
    file: BookmarkFile,
}

impl BookmarkStore {
    pub(crate) fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            file: BookmarkFile::new(path),
        }
    }

    pub(crate) fn file_path(&self) -> &Path {
        self.file.path()
    }

    /// Bookmark `path` under `name`, or under its final segment when no name is given.
    ///
    /// Returns the record as stored, which carries an annotated name if
    /// another bookmark already uses the same base name.
    pub(crate) fn add(&self, path: &Path, name: Option<&str>) -> Result<Bookmark, AppError> {
        let abs = absolutize(path)?;
        if !abs.exists() {
            return Err(AppError::PathNotFound { path: abs });
        }

        let name = match name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => default_name(&abs),
        };

        let records = self.file.load()?;
        let mut records = insert(&records, Bookmark::new(name, abs));
        self.file.save(&records)?;

        // insert appends, so the new record is last
        records.pop().ok_or_else(|| AppError::NotFound {
            key: path.display().to_string(),
        })
    }

    /// Remove bookmarks by path or by name, returning how many went.
    ///
    /// A key naming an existing file or directory matches on path only.
    /// Anything else matches a display name exactly or a base name, then
    /// falls back to the stored path so a bookmark whose target was deleted
    /// can still be removed by path.
    pub(crate) fn remove(&self, key: &str) -> Result<usize, AppError> {
        let records = self.file.load()?;
        let resolved = absolutize(Path::new(key)).ok();

        let by_path = |abs: &Path| partition(&records, |bm| bm.path == abs);
        let by_name = || partition(&records, |bm| bm.name == key || bm.base_name() == key);

        let (kept, removed) = match resolved.as_deref() {
            Some(abs) if abs.exists() => {
                debug_log!("removing by path {}", abs.display());
                by_path(abs)
            }
            Some(abs) => {
                debug_log!("removing by name {key:?}");
                or_else_if_none(by_name(), || by_path(abs))
            }
            None => by_name(),
        };

        if removed == 0 {
            return Err(AppError::NotFound {
                key: key.to_string(),
            });
        }

        self.file.save(&simplify(&kept))?;
        Ok(removed)
    }

    /// Display names in insertion order
    pub(crate) fn list(&self) -> Result<Vec<String>, AppError> {
        Ok(self.file.load()?.into_iter().map(|bm| bm.name).collect())
    }

    /// All records in insertion order
    pub(crate) fn entries(&self) -> Result<Vec<Bookmark>, AppError> {
        self.file.load()
    }

    /// Path of the first bookmark whose display name is exactly `name`
    pub(crate) fn search(&self, name: &str) -> Result<PathBuf, AppError> {
        self.file
            .load()?
            .into_iter()
            .find(|bm| bm.name == name)
            .map(|bm| bm.path)
            .ok_or_else(|| AppError::NotFound {
                key: name.to_string(),
            })
    }
}

fn partition(records: &[Bookmark], matches: impl Fn(&Bookmark) -> bool) -> (Vec<Bookmark>, usize) {
    let kept: Vec<Bookmark> = records.iter().filter(|bm| !matches(bm)).cloned().collect();
    let removed = records.len() - kept.len();
    (kept, removed)
}

/// Keep `first` unless it removed nothing
fn or_else_if_none(
    first: (Vec<Bookmark>, usize),
    fallback: impl FnOnce() -> (Vec<Bookmark>, usize),
) -> (Vec<Bookmark>, usize) {
    if first.1 == 0 { fallback() } else { first }
}
