use std::env;

use crate::core::{AppError, Result};

/// Server configuration for HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load from HOST / PORT, defaulting to 0.0.0.0:3333
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3333".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid PORT".to_string()))?;

        Ok(Self { host, port })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
