use comfy_table::{Cell, Table};

use crate::store::Bookmark;
use crate::utils::to_slash;

use super::format::{create_styled_table, header_cell};

/// Name/path table for `--list --long`.
///
/// The name column holds the full display name, the key `--search` takes.
pub(crate) fn build_bookmark_table(bookmarks: &[Bookmark], use_color: bool) -> Table {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("#", use_color),
        header_cell("Name", use_color),
        header_cell("Path", use_color),
    ]);

    for (i, bm) in bookmarks.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&bm.name),
            Cell::new(to_slash(&bm.path)),
        ]);
    }
    table
}

pub(crate) fn print_bookmark_table(bookmarks: &[Bookmark], use_color: bool) {
    if bookmarks.is_empty() {
        println!("No bookmarks yet. Add one with: okini --add <path> [name]");
        return;
    }
    println!("{}", build_bookmark_table(bookmarks, use_color));
}
