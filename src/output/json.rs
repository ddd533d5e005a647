use crate::error::AppError;
use crate::store::Bookmark;

/// Bookmarks as a pretty JSON array, the same shape as bookmarks.json
pub(crate) fn output_bookmarks_json(bookmarks: &[Bookmark]) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(bookmarks)?)
}
