/// Directory name under the user configuration directory
pub(crate) const APP_NAME: &str = "okini";

/// Environment variable that overrides the okini directory
pub(crate) const HOME_ENV: &str = "OKINI_HOME";

pub(crate) const DATA_FILE_NAME: &str = "bookmarks.json";

pub(crate) const CONFIG_FILE_NAME: &str = "config.toml";

/// Separator between a base name and its disambiguating path: "README <= /a/README"
pub(crate) const ANNOTATION_SEPARATOR: &str = " <= ";
