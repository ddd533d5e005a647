mod app;
mod cli;
mod config;
mod consts;
mod error;
mod output;
mod paths;
mod store;
mod utils;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use app::run_action;
use cli::{Action, Cli};
use config::Config;
use error::AppError;
use store::BookmarkStore;
use utils::{debug_log, set_debug};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(action) = cli.action() else {
        // No flags: show usage
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    };

    match run(cli, &action) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, action: &Action) -> Result<(), AppError> {
    let okini_dir = paths::okini_dir()?;
    let config_path = paths::config_path(&okini_dir);
    let config = if cli.debug {
        Config::load_verbose(&config_path)
    } else {
        Config::load(&config_path)
    };
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    let data_path = paths::data_path(&okini_dir, &config);
    debug_log!("data file: {}", data_path.display());
    let store = BookmarkStore::open(data_path);

    run_action(&store, action, &cli)
}
