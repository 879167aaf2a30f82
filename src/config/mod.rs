use std::env;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}")]
    InvalidVar(&'static str),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Process-wide bearer secret every request must present
    pub api_token: String,
    pub database_url: String,
    /// Mount prefix for the bookmark routes, e.g. "/api"
    pub api_prefix: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(v) => v.parse().map_err(|_| ConfigError::InvalidVar("PORT"))?,
            Err(_) => 8000,
        };

        let api_token = env::var("API_TOKEN").map_err(|_| ConfigError::MissingVar("API_TOKEN"))?;
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

        let api_prefix =
            normalize_prefix(&env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()));

        Ok(Self { port, api_token, database_url, api_prefix })
    }
}

/// Router nesting requires a leading slash and no trailing slash
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() || trimmed == "/" {
        return "/api".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
