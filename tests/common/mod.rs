use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request},
    response::Response,
    Router,
};
use serde_json::Value;
use tokio::sync::Mutex;

use bookmarks_api::config::AppConfig;
use bookmarks_api::database::models::{Bookmark, NewBookmark};
use bookmarks_api::database::repository::BookmarkStore;
use bookmarks_api::database::StoreError;
use bookmarks_api::{app, AppState};

pub const TEST_TOKEN: &str = "test-secret-token";

/// In-memory store double so endpoint tests run without Postgres
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    rows: Vec<Bookmark>,
    last_id: i64,
}

#[async_trait]
impl BookmarkStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Bookmark>, StoreError> {
        Ok(self.inner.lock().await.rows.clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Bookmark>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner.rows.iter().find(|b| b.id == id).cloned())
    }

    async fn insert(&self, new: NewBookmark) -> Result<Bookmark, StoreError> {
        let mut inner = self.inner.lock().await;
        inner.last_id += 1;
        let bookmark = Bookmark {
            id: inner.last_id,
            title: new.title,
            url: new.url,
            description: new.description,
            rating: new.rating,
        };
        inner.rows.push(bookmark.clone());
        Ok(bookmark)
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, StoreError> {
        let mut inner = self.inner.lock().await;
        let before = inner.rows.len();
        inner.rows.retain(|b| b.id != id);
        Ok((before - inner.rows.len()) as u64)
    }
}

/// Store that fails every operation, for exercising the 500 path
pub struct FailingStore;

fn backend_down() -> StoreError {
    StoreError::from(sqlx::Error::PoolClosed)
}

#[async_trait]
impl BookmarkStore for FailingStore {
    async fn list_all(&self) -> Result<Vec<Bookmark>, StoreError> {
        Err(backend_down())
    }

    async fn get_by_id(&self, _id: i64) -> Result<Option<Bookmark>, StoreError> {
        Err(backend_down())
    }

    async fn insert(&self, _new: NewBookmark) -> Result<Bookmark, StoreError> {
        Err(backend_down())
    }

    async fn delete_by_id(&self, _id: i64) -> Result<u64, StoreError> {
        Err(backend_down())
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        port: 0,
        api_token: TEST_TOKEN.to_string(),
        database_url: String::new(),
        api_prefix: "/api".to_string(),
    }
}

pub fn test_app_with(store: Arc<dyn BookmarkStore>) -> Router {
    app(AppState {
        store,
        config: Arc::new(test_config()),
    })
}

pub fn test_app() -> Router {
    test_app_with(Arc::new(MemoryStore::default()))
}

pub fn authed_request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", TEST_TOKEN));

    match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            builder.body(Body::from(json.to_string())).unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    serde_json::from_slice(&bytes).expect("response body is JSON")
}
