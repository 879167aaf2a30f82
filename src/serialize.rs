use std::collections::HashSet;

use serde::Serialize;

use crate::database::models::Bookmark;

/// Wire representation of a stored bookmark
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookmarkView {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: i32,
}

/// Map a stored record to its wire form.
///
/// `title` and `description` pass through the sanitizer so a stored
/// value containing markup can never reach a client executable; `id`
/// and `url` are copied verbatim. Deterministic and side-effect-free.
pub fn serialize_bookmark(bookmark: &Bookmark) -> BookmarkView {
    BookmarkView {
        id: bookmark.id,
        title: sanitize(&bookmark.title),
        url: bookmark.url.clone(),
        description: sanitize(&bookmark.description),
        rating: bookmark.rating,
    }
}

/// Strip all markup, keeping plain text. Script and style bodies are
/// dropped entirely rather than unwrapped.
fn sanitize(input: &str) -> String {
    ammonia::Builder::default()
        .tags(HashSet::new())
        .clean(input)
        .to_string()
}
