use std::env;
use std::sync::Arc;

use reqwest::Client;

/// Default upstream for the placeholder user API.
pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Application configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the placeholder user API.
    pub api_base_url: String,
}

impl AppConfig {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let api_base_url = env::var("ROSTER_API_URL")
            .ok()
            .map(|url| url.trim_end_matches('/').to_owned())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());

        Self { api_base_url }
    }
}

/// Shared application context passed into screen handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone)]
pub struct Context {
    pub http: Arc<Client>,
    pub config: Arc<AppConfig>,
}

impl Context {
    /// Create a new application context.
    pub fn new(http: Arc<Client>, config: AppConfig) -> Self {
        Self {
            http,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_falls_back_to_default_base_url() {
        // The test environment does not set ROSTER_API_URL.
        if env::var("ROSTER_API_URL").is_err() {
            let config = AppConfig::from_env();
            assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        }
    }
}
