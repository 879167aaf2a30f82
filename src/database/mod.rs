pub mod models;
pub mod pool;
pub mod repository;

use thiserror::Error;

/// Errors from the bookmark store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
