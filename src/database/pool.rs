use sqlx::{postgres::PgPoolOptions, PgPool};

use super::StoreError;

/// Create a connection pool against the configured Postgres database
pub async fn connect(database_url: &str) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;
    Ok(pool)
}
