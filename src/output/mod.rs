mod format;
mod json;
mod table;

pub(crate) use json::output_bookmarks_json;
pub(crate) use table::print_bookmark_table;
