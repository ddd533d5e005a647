//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::config::Config;

use super::commands::Action;

const AFTER_HELP: &str = "\
Examples:
  okini --add /path/to/file
  okini --add /path/to/file myfile
  okini --remove /path/to/file
  okini --remove myfile
  okini --list | fzf | xargs okini --search";

#[derive(Parser)]
#[command(name = "okini")]
#[command(about = "okini - File path bookmark tool", version)]
#[command(after_help = AFTER_HELP)]
#[command(group(ArgGroup::new("action").args(["add", "remove", "list", "search"])))]
pub(crate) struct Cli {
    /// Add a bookmark for the file path
    #[arg(long, value_name = "PATH")]
    pub(crate) add: Option<PathBuf>,

    /// Bookmark name for --add (defaults to the last path segment)
    #[arg(value_name = "NAME", requires = "add")]
    pub(crate) name: Option<String>,

    /// Remove bookmark(s) by path or name
    #[arg(long, value_name = "PATH_OR_NAME")]
    pub(crate) remove: Option<String>,

    /// List all bookmark names
    #[arg(long)]
    pub(crate) list: bool,

    /// Search path by name
    #[arg(long, value_name = "NAME")]
    pub(crate) search: Option<String>,

    /// With --list, show a table of names and paths
    #[arg(short, long, requires = "list")]
    pub(crate) long: bool,

    /// With --list, output as JSON
    #[arg(short, long, requires = "list")]
    pub(crate) json: bool,

    /// Enable debug output on stderr
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // Boolean flags: config only applies if CLI is false (default)
        if !self.debug && config.debug {
            self.debug = true;
        }
        if !self.long && !self.json && config.long {
            self.long = true;
        }
        self
    }

    /// The requested action, if any flag selected one
    pub(crate) fn action(&self) -> Option<Action> {
        if let Some(path) = &self.add {
            return Some(Action::Add {
                path: path.clone(),
                name: self.name.clone(),
            });
        }
        if let Some(key) = &self.remove {
            return Some(Action::Remove { key: key.clone() });
        }
        if let Some(name) = &self.search {
            return Some(Action::Search { name: name.clone() });
        }
        if self.list {
            return Some(Action::List);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("okini").chain(args.iter().copied())).expect("parse")
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_add_with_name() {
        let cli = parse(&["--add", "/tmp/file", "myfile"]);
        assert_eq!(
            cli.action(),
            Some(Action::Add {
                path: PathBuf::from("/tmp/file"),
                name: Some("myfile".to_string()),
            })
        );
    }

    #[test]
    fn test_add_without_name() {
        let cli = parse(&["--add", "/tmp/file"]);
        assert_eq!(
            cli.action(),
            Some(Action::Add {
                path: PathBuf::from("/tmp/file"),
                name: None,
            })
        );
    }

    #[test]
    fn test_other_actions() {
        assert_eq!(
            parse(&["--remove", "notes"]).action(),
            Some(Action::Remove {
                key: "notes".to_string()
            })
        );
        assert_eq!(
            parse(&["--search", "notes"]).action(),
            Some(Action::Search {
                name: "notes".to_string()
            })
        );
        assert_eq!(parse(&["--list"]).action(), Some(Action::List));
        assert_eq!(parse(&[]).action(), None);
    }

    #[test]
    fn test_actions_are_exclusive() {
        let result = Cli::try_parse_from(["okini", "--list", "--search", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_name_requires_add() {
        let result = Cli::try_parse_from(["okini", "--list", "stray"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_format_flags_require_list() {
        assert!(Cli::try_parse_from(["okini", "--json"]).is_err());
        assert!(Cli::try_parse_from(["okini", "--long"]).is_err());
        assert!(Cli::try_parse_from(["okini", "--search", "x", "-l"]).is_err());
        assert!(parse(&["--list", "-l"]).long);
    }

    #[test]
    fn test_with_config_long() {
        let config = Config {
            long: true,
            ..Config::default()
        };
        assert!(parse(&["--list"]).with_config(&config).long);
        // An explicit --json keeps the JSON renderer
        assert!(!parse(&["--list", "--json"]).with_config(&config).long);
    }

    #[test]
    fn test_with_config_debug() {
        let config = Config {
            debug: true,
            ..Config::default()
        };
        assert!(parse(&["--list"]).with_config(&config).debug);
        assert!(!parse(&["--list"]).with_config(&Config::default()).debug);
    }
}
