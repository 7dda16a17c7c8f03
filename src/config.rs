//! Process configuration.
//!
//! Built once at start-up and handed to the [`Orchestrator`](crate::Orchestrator);
//! nothing below this point reads the environment.

use std::env;
use std::fmt;

/// Environment variable holding the ReviewWeb API key.
pub const ACCESS_KEY_ENV: &str = "REVIEWWEBSITE_ACCESS_KEY";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "REVIEWWEBSITE_API_URL";

/// Public ReviewWeb API endpoint.
pub const DEFAULT_API_URL: &str = "https://reviewweb.site/api/v1";

#[derive(Clone)]
pub struct Config {
    api_key: Option<String>,
    api_url: String,
}

impl Config {
    /// Create a configuration from explicit values.
    ///
    /// Empty strings count as absent: an empty key is no key, an empty URL
    /// falls back to [`DEFAULT_API_URL`].
    pub fn new(api_key: Option<String>, api_url: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            api_url: api_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        }
    }

    /// Load configuration from the environment
    ///
    /// Priority for base URL:
    /// 1. Explicit `api_url` parameter
    /// 2. REVIEWWEBSITE_API_URL environment variable
    /// 3. Default: https://reviewweb.site/api/v1
    ///
    /// The API key is read from REVIEWWEBSITE_ACCESS_KEY.
    pub fn from_env(api_url: Option<String>) -> Self {
        let api_url = api_url
            .filter(|url| !url.trim().is_empty())
            .or_else(|| env::var(API_URL_ENV).ok());
        Self::new(env::var(ACCESS_KEY_ENV).ok(), api_url)
    }

    /// Configured API key, if any.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Base URL of the remote API.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
