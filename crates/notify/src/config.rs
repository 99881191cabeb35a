//! Runtime configuration sourced from the environment.

use crate::error::NotifyError;

/// Environment variable holding the Readwise API token.
pub const ENV_API_TOKEN: &str = "API_TOKEN";

/// Environment variable holding the Slack webhook URL.
pub const ENV_WEBHOOK_URL: &str = "WEBHOOK_URL";

/// Environment variable overriding the highlights endpoint.
pub const ENV_HIGHLIGHTS_URL: &str = "HIGHLIGHTS_URL";

/// Default Readwise daily review endpoint.
pub const DEFAULT_HIGHLIGHTS_URL: &str = "https://readwise.io/api/v2/review/";

/// Validated configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Readwise API token.
    pub api_token: String,
    /// Slack incoming webhook URL.
    pub webhook_url: String,
    /// Readwise highlights endpoint.
    pub highlights_url: String,
}

impl Config {
    /// Build configuration from environment variables.
    ///
    /// # Required Environment Variables
    /// - `API_TOKEN`: Readwise API token
    /// - `WEBHOOK_URL`: Slack incoming webhook URL
    ///
    /// # Optional Environment Variables
    /// - `HIGHLIGHTS_URL`: highlights endpoint (default: daily review API)
    ///
    /// Fails with [`NotifyError::Config`] before any network I/O if a
    /// required variable is absent or blank.
    pub fn from_env() -> Result<Self, NotifyError> {
        let api_token = require(ENV_API_TOKEN)?;
        let webhook_url = require(ENV_WEBHOOK_URL)?;

        let highlights_url = std::env::var(ENV_HIGHLIGHTS_URL)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HIGHLIGHTS_URL.to_string());

        Ok(Self {
            api_token,
            webhook_url,
            highlights_url,
        })
    }
}

fn require(name: &'static str) -> Result<String, NotifyError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(NotifyError::Config { name }),
    }
}
