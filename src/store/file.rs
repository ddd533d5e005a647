use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::utils::debug_log;

use super::types::Bookmark;

/// The JSON file backing the store
#[derive(Debug, Clone)]
pub(crate) struct BookmarkFile {
    path: PathBuf,
}

impl BookmarkFile {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Read all bookmarks. A missing file is an empty store.
    pub(crate) fn load(&self) -> Result<Vec<Bookmark>, AppError> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug_log!("{} does not exist yet", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(AppError::io("read", &self.path, e)),
        };

        // `null` is what an empty list used to be written as
        let records: Option<Vec<Bookmark>> =
            serde_json::from_slice(&content).map_err(|source| AppError::Decode {
                path: self.path.clone(),
                source,
            })?;
        let records = records.unwrap_or_default();
        debug_log!(
            "loaded {} bookmark(s) from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    /// Replace the file with `records`, creating its directory if needed
    pub(crate) fn save(&self, records: &[Bookmark]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            create_dir(parent)?;
        }

        let json = serde_json::to_string_pretty(records)?;
        let mut file = open_for_write(&self.path)?;
        file.write_all(json.as_bytes())
            .map_err(|e| AppError::io("write", &self.path, e))?;
        debug_log!(
            "wrote {} bookmark(s), {} bytes to {}",
            records.len(),
            json.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(unix)]
fn create_dir(dir: &Path) -> Result<(), AppError> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new()
        .recursive(true)
        .mode(0o777)
        .create(dir)
        .map_err(|e| AppError::io("create directory", dir, e))
}

#[cfg(not(unix))]
fn create_dir(dir: &Path) -> Result<(), AppError> {
    fs::create_dir_all(dir).map_err(|e| AppError::io("create directory", dir, e))
}

fn open_for_write(path: &Path) -> Result<fs::File, AppError> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    options
        .open(path)
        .map_err(|e| AppError::io("write", path, e))
}
