use std::env;

use crate::core::Result;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Ok(Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            server: ServerConfig::from_env()?,
        })
    }
}
