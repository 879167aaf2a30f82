use serde::Serialize;

/// A persisted bookmark row
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Bookmark {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: i32,
}

/// A validated create payload, ready for insertion. The id is assigned
/// by the backing store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: i32,
}
