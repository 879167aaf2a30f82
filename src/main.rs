use std::sync::Arc;

use bookmarks_api::config::AppConfig;
use bookmarks_api::database::{pool, repository::PgBookmarkStore};
use bookmarks_api::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL and API_TOKEN
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;

    let pool = pool::connect(&config.database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let state = AppState {
        store: Arc::new(PgBookmarkStore::new(pool)),
        config: Arc::new(config.clone()),
    };

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("bookmarks API listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
