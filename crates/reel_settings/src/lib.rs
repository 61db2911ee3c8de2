use serde::Serialize;
use std::env;

pub mod database;

pub use database::DatabaseSettings;

#[derive(Debug, Clone, Serialize)]
pub struct ReelServerConfig {
    pub database_settings: DatabaseSettings,
    pub server_port: String,
    /// Page size served when `GET /videos` carries no `limit` parameter.
    pub default_page_size: i64,
}

impl Default for ReelServerConfig {
    fn default() -> Self {
        let database = DatabaseSettings::default();

        let server_port = env::var("REEL_SERVER_PORT").unwrap_or_else(|_| "8000".to_string());

        let default_page_size = env::var("REEL_DEFAULT_PAGE_SIZE")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<i64>()
            .unwrap();

        Self {
            database_settings: database,
            server_port,
            default_page_size,
        }
    }
}
