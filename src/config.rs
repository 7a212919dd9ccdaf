//! Application configuration.
//!
//! Holds the backend base URL and builds full endpoint URLs from it.

use thiserror::Error;

/// Default backend URL
const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    api_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let api_url =
            std::env::var("CONSOLE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self { api_url }
    }
}

impl AppConfig {
    /// Create a configuration with default values (honors `CONSOLE_API_URL`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Base URL of the backend.
    pub fn base_url(&self) -> &str {
        &self.api_url
    }

    /// Full URL for an API endpoint path.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

/// Builder for [`AppConfig`].
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    api_url: Option<String>,
}

impl AppConfigBuilder {
    /// Set the backend base URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let api_url = self
            .api_url
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl(api_url));
        }
        // A trailing slash would produce double slashes when joining paths.
        let api_url = api_url.trim_end_matches('/').to_string();
        Ok(AppConfig { api_url })
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}
