//! Locations of okini's files
//!
//! Everything lives in one directory:
//! - `$OKINI_HOME` when set
//! - otherwise `<user config dir>/okini` (`~/.config/okini` on Linux,
//!   `~/Library/Application Support/okini` on macOS, `%APPDATA%\okini` on Windows)
//!
//! Nothing here is cached; each call re-reads the environment.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::consts::{APP_NAME, CONFIG_FILE_NAME, DATA_FILE_NAME, HOME_ENV};
use crate::error::AppError;

pub(crate) fn okini_dir() -> Result<PathBuf, AppError> {
    resolve_okini_dir(std::env::var_os(HOME_ENV), dirs::config_dir())
}

fn resolve_okini_dir(
    home_override: Option<OsString>,
    config_dir: Option<PathBuf>,
) -> Result<PathBuf, AppError> {
    if let Some(home) = home_override
        && !home.is_empty()
    {
        return Ok(PathBuf::from(home));
    }
    config_dir
        .map(|dir| dir.join(APP_NAME))
        .ok_or(AppError::ConfigDirUnavailable)
}

pub(crate) fn config_path(okini_dir: &Path) -> PathBuf {
    okini_dir.join(CONFIG_FILE_NAME)
}

/// Bookmark file, honoring `data_file` from the config (relative paths are
/// taken from the okini directory)
pub(crate) fn data_path(okini_dir: &Path, config: &Config) -> PathBuf {
    match &config.data_file {
        Some(file) => okini_dir.join(file),
        None => okini_dir.join(DATA_FILE_NAME),
    }
}
