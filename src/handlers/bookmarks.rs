use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use serde_json::Value;

use crate::app::AppState;
use crate::database::models::Bookmark;
use crate::database::repository::BookmarkStore;
use crate::error::ApiError;
use crate::serialize::{serialize_bookmark, BookmarkView};
use crate::validate::validate;

/// GET {prefix}/bookmarks - list all bookmarks
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<BookmarkView>>, ApiError> {
    let bookmarks = state.store.list_all().await?;
    Ok(Json(bookmarks.iter().map(serialize_bookmark).collect()))
}

/// POST {prefix}/bookmarks - create a bookmark
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let new = validate(&payload).map_err(|err| {
        tracing::error!("rejected create payload: {}", err);
        ApiError::Validation(err)
    })?;

    let bookmark = state.store.insert(new).await?;
    tracing::info!(id = bookmark.id, "bookmark created");

    let location = format!("{}/bookmarks/{}", state.config.api_prefix, bookmark.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(serialize_bookmark(&bookmark)),
    ))
}

/// GET {prefix}/bookmarks/:id - show a single bookmark
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BookmarkView>, ApiError> {
    let bookmark = find_or_404(state.store.as_ref(), &id).await?;
    Ok(Json(serialize_bookmark(&bookmark)))
}

/// DELETE {prefix}/bookmarks/:id - remove a bookmark
pub async fn delete_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let bookmark = find_or_404(state.store.as_ref(), &id).await?;

    // Existence was just checked, so the affected-row count is not
    // client-visible; a concurrent delete still yields a 204.
    state.store.delete_by_id(bookmark.id).await?;
    tracing::info!(id = bookmark.id, "bookmark deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Shared `:id` resolution for the single-resource routes. A segment that
/// does not parse as an id cannot match any row, so it maps to the same 404.
async fn find_or_404(store: &dyn BookmarkStore, raw_id: &str) -> Result<Bookmark, ApiError> {
    let found = match raw_id.parse::<i64>() {
        Ok(id) => store.get_by_id(id).await?,
        Err(_) => None,
    };

    found.ok_or_else(|| {
        tracing::error!(id = %raw_id, "bookmark not found");
        ApiError::NotFound
    })
}
