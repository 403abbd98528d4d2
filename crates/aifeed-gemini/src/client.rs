//! HTTP client for the Gemini `generateContent` endpoint.
//!
//! Wraps `reqwest` with API key management and typed response
//! deserialization. One prompt in, one text completion out — both the query
//! optimizer and the topic categorizer ride on this single call shape.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::GeminiError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const MODEL: &str = "gemini-pro";

/// Client for the Gemini generative-language REST API.
///
/// Use [`GeminiClient::new`] for production or
/// [`GeminiClient::with_base_url`] to point at a mock server in tests.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiClient {
    /// Creates a new client pointed at the production Gemini API.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, GeminiError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeminiError::Api`] if `base_url` is not
    /// a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GeminiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("aifeed/0.1 (news-aggregation)")
            .build()?;

        let base_url = Url::parse(base_url)
            .map_err(|e| GeminiError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Sends one prompt and returns the first candidate's text.
    ///
    /// # Errors
    ///
    /// - [`GeminiError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeminiError::Deserialize`] if the response does not match the
    ///   expected shape.
    /// - [`GeminiError::EmptyCandidates`] if the response parses but holds
    ///   no candidate text.
    pub async fn generate_content(&self, prompt: &str) -> Result<String, GeminiError> {
        let url = self.generate_url()?;
        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self.client.post(url.clone()).json(&request).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| GeminiError::Deserialize {
                context: format!("{MODEL}:generateContent"),
                source: e,
            })?;

        parsed
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .find_map(|p| p.text)
            .ok_or(GeminiError::EmptyCandidates)
    }

    /// Builds the `generateContent` URL with the API key as an encoded
    /// query parameter.
    fn generate_url(&self) -> Result<Url, GeminiError> {
        let mut url = self
            .base_url
            .join(&format!(
                "{}/models/{MODEL}:generateContent",
                self.base_url.path().trim_end_matches('/')
            ))
            .map_err(|e| GeminiError::Api(format!("invalid endpoint path: {e}")))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_url_appends_model_path_and_key() {
        let client = GeminiClient::with_base_url("test-key", 20, "https://gemini.test/v1beta")
            .expect("client construction should not fail");
        let url = client.generate_url().expect("url should build");
        assert_eq!(
            url.as_str(),
            "https://gemini.test/v1beta/models/gemini-pro:generateContent?key=test-key"
        );
    }

    #[test]
    fn generate_url_encodes_key_material() {
        let client = GeminiClient::with_base_url("a&b c", 20, "https://gemini.test/v1beta")
            .expect("client construction should not fail");
        let url = client.generate_url().expect("url should build");
        assert!(
            !url.as_str().contains("a&b c"),
            "key should be percent-encoded: {url}"
        );
    }
}
