//! Application configuration loading from environment variables.
//!
//! # Environment Variables
//!
//! ## Required Variables
//! - `GIPHY_API_KEY`: API key sent with every feed request
//!
//! ## Optional Variables
//! - `RUST_LOG`: Logging level (default: "info,giphy_feed=debug")
//! - `GIPHY_BASE_URL`: API host (default: "https://api.giphy.com")
//! - `GIPHY_LANGUAGE`: Language code sent with feed requests (default: "en")
//! - `FEED_PAGE_SIZE`: Items requested per page (default: 10)
//! - `HTTP_TIMEOUT_SECONDS`: Per-request timeout (default: 30)

use crate::infrastructure::network::config::NetworkConfig;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Complete client configuration loaded from environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Scheme and host every relative endpoint path is joined to
    pub giphy_base_url: Url,

    pub giphy_api_key: String,

    /// Language code sent as the `language` query parameter
    pub giphy_language: String,

    /// Items requested per page
    pub feed_page_size: usize,

    pub http_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any required environment variable is missing or
    /// cannot be parsed to the expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            giphy_base_url: env_or(
                &lookup,
                "GIPHY_BASE_URL",
                Url::parse("https://api.giphy.com")?,
            )?,
            giphy_api_key: env_required(&lookup, "GIPHY_API_KEY")?,
            giphy_language: env_or(&lookup, "GIPHY_LANGUAGE", "en".to_string())?,
            feed_page_size: env_or(&lookup, "FEED_PAGE_SIZE", 10)?,
            http_timeout_seconds: env_or(&lookup, "HTTP_TIMEOUT_SECONDS", 30)?,
        };
        if config.feed_page_size == 0 {
            anyhow::bail!("FEED_PAGE_SIZE must be greater than zero");
        }
        Ok(config)
    }

    /// Transport settings shared by every API request.
    pub fn network_config(&self) -> NetworkConfig {
        NetworkConfig::new(self.giphy_base_url.clone())
            .with_header("Accept", "application/json")
            .with_query_parameter("api_key", self.giphy_api_key.clone())
            .with_query_parameter("language", self.giphy_language.clone())
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_seconds)
    }
}

/// Load a required environment variable.
///
/// # Errors
///
/// Returns an error if the variable is not set.
fn env_required<F>(lookup: &F, key: &str) -> anyhow::Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).ok_or_else(|| anyhow::anyhow!("Missing required environment variable: {}", key))
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        None => Ok(default),
    }
}
