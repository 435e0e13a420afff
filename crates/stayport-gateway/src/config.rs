//! Gateway configuration.

use std::env;

/// Environment variable overriding the backend origin.
pub const BASE_URL_ENV: &str = "STAYPORT_API_BASE_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Configuration for the REST gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Backend origin including any path prefix
    /// (e.g. `http://localhost:8080/api`). No trailing slash.
    pub base_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

impl GatewayConfig {
    /// Read the backend origin from the environment, falling back to
    /// the local default when unset.
    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}
