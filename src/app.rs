use std::io::IsTerminal;
use std::path::Path;

use crate::cli::{Action, Cli};
use crate::error::AppError;
use crate::output::{output_bookmarks_json, print_bookmark_table};
use crate::store::BookmarkStore;
use crate::utils::{debug_log, to_slash};

fn handle_add(store: &BookmarkStore, path: &Path, name: Option<&str>) -> Result<(), AppError> {
    let added = store.add(path, name)?;
    println!("Bookmark added: {} ({})", added.name, to_slash(&added.path));
    Ok(())
}

fn handle_remove(store: &BookmarkStore, key: &str) -> Result<(), AppError> {
    let removed = store.remove(key)?;
    println!("Removed {removed} bookmark(s)");
    Ok(())
}

fn handle_list(store: &BookmarkStore, cli: &Cli) -> Result<(), AppError> {
    if cli.json {
        println!("{}", output_bookmarks_json(&store.entries()?)?);
    } else if cli.long {
        print_bookmark_table(&store.entries()?, std::io::stdout().is_terminal());
    } else {
        for name in store.list()? {
            println!("{name}");
        }
    }
    Ok(())
}

fn handle_search(store: &BookmarkStore, name: &str) -> Result<(), AppError> {
    let path = store.search(name)?;
    println!("{}", path.display());
    Ok(())
}

/// Run one action against the store
pub(crate) fn run_action(store: &BookmarkStore, action: &Action, cli: &Cli) -> Result<(), AppError> {
    debug_log!(
        "{:?} on {} ({})",
        action,
        store.file_path().display(),
        if action.is_mutating() { "read-write" } else { "read-only" }
    );

    match action {
        Action::Add { path, name } => handle_add(store, path, name.as_deref()),
        Action::Remove { key } => handle_remove(store, key),
        Action::List => handle_list(store, cli),
        Action::Search { name } => handle_search(store, name),
    }
}
