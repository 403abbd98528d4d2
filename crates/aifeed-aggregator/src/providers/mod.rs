//! Provider adapters: one client per upstream news API.
//!
//! Each adapter translates the common [`crate::types::FetchParams`] intent
//! into its provider's parameter vocabulary, performs a typed-but-partial
//! decode of the documented response shape, and maps records into the
//! canonical [`aifeed_core::Article`]. Adapters return `Result`; failure
//! absorption is the orchestrator's job.

pub mod gnews;
pub mod newsapi;
pub mod newsdata;

pub use gnews::GnewsClient;
pub use newsapi::NewsApiClient;
pub use newsdata::NewsDataClient;

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::AggregateError;

const USER_AGENT: &str = "aifeed/0.1 (news-aggregation)";

/// Build the shared `reqwest` client configuration for a provider.
pub(crate) fn http_client(timeout_secs: u64) -> Result<reqwest::Client, AggregateError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Normalize a base URL: no trailing slash, validated as a URL.
pub(crate) fn normalize_base_url(base_url: &str) -> Result<String, AggregateError> {
    let trimmed = base_url.trim_end_matches('/');
    reqwest::Url::parse(trimmed)
        .map_err(|e| AggregateError::Api(format!("invalid base URL '{base_url}': {e}")))?;
    Ok(trimmed.to_string())
}

/// Send a GET, assert a 2xx status, and decode the body as JSON.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: reqwest::Url,
    context: &str,
) -> Result<T, AggregateError> {
    let response = client.get(url).send().await?;
    let response = response.error_for_status()?;
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| AggregateError::Deserialize {
        context: context.to_string(),
        source: e,
    })
}
