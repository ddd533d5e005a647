use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid path \"{input}\": {reason}")]
    InvalidPath { input: String, reason: String },

    #[error("Path does not exist: {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error("No bookmark found for: {key}")]
    NotFound { key: String },

    #[error("Failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed bookmark file {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode bookmarks: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Could not determine the user configuration directory")]
    ConfigDirUnavailable,
}

impl AppError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
