/// Configuration management for the API Gateway
///
/// Resolved once at startup from environment variables and injected into the
/// components that need it; nothing reads the environment ad hoc afterwards.
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Downstream service endpoints
    pub services: ServicesConfig,
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

/// Downstream service endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// Post service gRPC endpoint
    pub post_service: String,
    /// Identity service HTTP base URL
    pub identity_service: String,
    /// Timeout for identity service calls, in milliseconds
    pub identity_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let port = match std::env::var("GATEWAY_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| format!("Failed to parse GATEWAY_PORT='{raw}': {e}"))?,
            Err(_) => 8080,
        };

        let identity_timeout_ms = match std::env::var("IDENTITY_TIMEOUT_MS") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| format!("Failed to parse IDENTITY_TIMEOUT_MS='{raw}': {e}"))?,
            Err(_) => 5_000,
        };

        Ok(Config {
            app: AppConfig {
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                host: std::env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port,
            },
            services: ServicesConfig {
                post_service: std::env::var("POST_SERVICE_URL")
                    .unwrap_or_else(|_| "http://post-service:50051".to_string()),
                identity_service: std::env::var("IDENTITY_SERVICE_URL")
                    .unwrap_or_else(|_| "http://identity-service:8000".to_string()),
                identity_timeout_ms,
            },
        })
    }
}
