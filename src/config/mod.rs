//! Configuration module for the Publica client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::time::Duration;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the REST API (e.g. http://host:8080/proyecto01)
    pub api_url: String,
    /// Base URL of the auth provider's REST endpoints
    pub auth_url: String,
    /// API key appended to auth provider requests
    pub auth_key: Option<String>,
    /// Image host upload endpoint
    pub upload_url: String,
    /// Unsigned upload preset registered with the image host
    pub upload_preset: String,
    /// Bounded fan-out width for feed aggregation (minimum 1)
    pub fetch_concurrency: usize,
    /// Per-request HTTP timeout
    pub http_timeout: Duration,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_url = env::var("PUBLICA_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080/proyecto01".to_string());

        let auth_url = env::var("PUBLICA_AUTH_URL")
            .unwrap_or_else(|_| "https://identitytoolkit.googleapis.com/v1".to_string());

        let auth_key = env::var("PUBLICA_AUTH_KEY").ok();

        let upload_url = env::var("PUBLICA_UPLOAD_URL").unwrap_or_else(|_| {
            "https://api.cloudinary.com/v1_1/publica/image/upload".to_string()
        });

        let upload_preset =
            env::var("PUBLICA_UPLOAD_PRESET").unwrap_or_else(|_| "publica".to_string());

        let fetch_concurrency = env::var("PUBLICA_FETCH_CONCURRENCY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8)
            .max(1);

        let http_timeout = env::var("PUBLICA_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(10));

        let log_level = env::var("PUBLICA_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            api_url,
            auth_url,
            auth_key,
            upload_url,
            upload_preset,
            fetch_concurrency,
            http_timeout,
            log_level,
        }
    }
}
