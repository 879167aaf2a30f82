use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::database::repository::BookmarkStore;
use crate::handlers::bookmarks;
use crate::middleware::auth::bearer_auth;

/// Shared per-process state: the storage abstraction and the configuration
/// it was wired with. No other mutable state exists in the process.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BookmarkStore>,
    pub config: Arc<AppConfig>,
}

/// Build the router: bookmark routes behind the bearer gate, mounted
/// under the configured prefix, plus the public greeting.
pub fn app(state: AppState) -> Router {
    let bookmark_routes = Router::new()
        .route("/bookmarks", get(bookmarks::list).post(bookmarks::create))
        .route(
            "/bookmarks/:id",
            get(bookmarks::get_one).delete(bookmarks::delete_one),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), bearer_auth));

    Router::new()
        .route("/", get(root))
        .nest(&state.config.api_prefix, bookmark_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> &'static str {
    "Hello, world!"
}
