use async_trait::async_trait;
use sqlx::PgPool;

use super::models::{Bookmark, NewBookmark};
use super::StoreError;

/// Data-access operations for bookmark records.
///
/// Absence is a value here, not a fault: `get_by_id` returns `None` and
/// `delete_by_id` returns an affected-row count of 0 when no row matches.
/// The caller decides whether that becomes a client-visible 404.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// All stored bookmarks in the store's natural (insertion) order
    async fn list_all(&self) -> Result<Vec<Bookmark>, StoreError>;

    /// The matching bookmark, or None when no row has this id
    async fn get_by_id(&self, id: i64) -> Result<Option<Bookmark>, StoreError>;

    /// Persist a new record; the store assigns the id
    async fn insert(&self, new: NewBookmark) -> Result<Bookmark, StoreError>;

    /// Remove the matching record, returning the affected-row count (0 or 1)
    async fn delete_by_id(&self, id: i64) -> Result<u64, StoreError>;
}

/// Postgres-backed bookmark store
pub struct PgBookmarkStore {
    pool: PgPool,
}

impl PgBookmarkStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookmarkStore for PgBookmarkStore {
    async fn list_all(&self) -> Result<Vec<Bookmark>, StoreError> {
        let rows = sqlx::query_as::<_, Bookmark>(
            "SELECT id, title, url, description, rating FROM bookmarks ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Bookmark>, StoreError> {
        let row = sqlx::query_as::<_, Bookmark>(
            "SELECT id, title, url, description, rating FROM bookmarks WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, new: NewBookmark) -> Result<Bookmark, StoreError> {
        let row = sqlx::query_as::<_, Bookmark>(
            "INSERT INTO bookmarks (title, url, description, rating) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, title, url, description, rating",
        )
        .bind(new.title)
        .bind(new.url)
        .bind(new.description)
        .bind(new.rating)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
