use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Optional settings read from `<okini dir>/config.toml`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) debug: bool,
    /// Render `--list` as a name/path table
    #[serde(default)]
    pub(crate) long: bool,
    #[serde(default)]
    pub(crate) data_file: Option<PathBuf>,
}

impl Config {
    pub(crate) fn load(path: &Path) -> Self {
        Self::load_internal(path, true)
    }

    pub(crate) fn load_verbose(path: &Path) -> Self {
        Self::load_internal(path, false)
    }

    fn load_internal(path: &Path, quiet: bool) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Warning: Failed to read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match toml::from_str::<Config>(&content) {
            Ok(config) => {
                if !quiet {
                    eprintln!("Loaded config from {}", path.display());
                }
                config
            }
            Err(e) => {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
