pub mod app;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod serialize;
pub mod validate;

pub use app::{app, AppState};
