/// Configuration management for the Post Service
///
/// Loaded once at startup from environment variables and injected into the
/// components that need it.
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let port = match std::env::var("POST_SERVICE_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| format!("Failed to parse POST_SERVICE_PORT='{raw}': {e}"))?,
            Err(_) => 50051,
        };

        Ok(Config {
            app: AppConfig {
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                host: std::env::var("POST_SERVICE_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port,
            },
        })
    }
}
