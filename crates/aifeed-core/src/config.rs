//! Environment-driven configuration for the aggregation pipeline.
//!
//! Provider API keys are optional by design: a missing key disables that
//! provider (or the Gemini assists) rather than failing the process. This
//! makes "provider disabled" an explicit configuration state carried in the
//! struct, not a hidden module-level flag.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Pipeline configuration, one credential slot per upstream service.
#[derive(Clone)]
pub struct FeedConfig {
    /// NewsData.io API key (`NEWSDATA_API_KEY`).
    pub newsdata_api_key: Option<String>,
    /// GNews API key (`GNEWS_API_KEY`).
    pub gnews_api_key: Option<String>,
    /// NewsAPI key (`NEWSAPI_API_KEY`).
    pub newsapi_api_key: Option<String>,
    /// Google Gemini API key (`GEMINI_API_KEY`).
    pub gemini_api_key: Option<String>,
    /// Per-request timeout for all upstream HTTP calls.
    pub request_timeout_secs: u64,
}

impl std::fmt::Debug for FeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |key: &Option<String>| key.as_ref().map(|_| "[redacted]");
        f.debug_struct("FeedConfig")
            .field("newsdata_api_key", &redact(&self.newsdata_api_key))
            .field("gnews_api_key", &redact(&self.gnews_api_key))
            .field("newsapi_api_key", &redact(&self.newsapi_api_key))
            .field("gemini_api_key", &redact(&self.gemini_api_key))
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl FeedConfig {
    /// Load configuration from process environment variables.
    ///
    /// Does NOT load `.env` files; callers that want dotenv behaviour run
    /// `dotenvy::dotenv().ok()` first (the CLI does).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if a numeric variable fails to
    /// parse. Missing API keys are not errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Build configuration from the provided env-var lookup function.
    ///
    /// Decoupled from the real environment so tests can drive it with a
    /// plain `HashMap` lookup — no `set_var`/`remove_var` needed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if a numeric variable fails to
    /// parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let optional = |var: &str| -> Option<String> {
            lookup(var).ok().filter(|v| !v.trim().is_empty())
        };
        let or_default =
            |var: &str, default: &str| -> String { lookup(var).unwrap_or_else(|_| default.to_string()) };

        let raw_timeout = or_default("AIFEED_REQUEST_TIMEOUT_SECS", "20");
        let request_timeout_secs =
            raw_timeout
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: "AIFEED_REQUEST_TIMEOUT_SECS".to_string(),
                    reason: e.to_string(),
                })?;

        Ok(Self {
            newsdata_api_key: optional("NEWSDATA_API_KEY"),
            gnews_api_key: optional("GNEWS_API_KEY"),
            newsapi_api_key: optional("NEWSAPI_API_KEY"),
            gemini_api_key: optional("GEMINI_API_KEY"),
            request_timeout_secs,
        })
    }
}
