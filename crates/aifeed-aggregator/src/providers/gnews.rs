//! GNews adapter (`/api/v4/search`).

use aifeed_core::Article;
use reqwest::Url;
use serde::Deserialize;

use crate::country::infer_country;
use crate::error::AggregateError;
use crate::providers::{get_json, http_client, normalize_base_url};
use crate::types::{FetchParams, SortPreference};

const DEFAULT_BASE_URL: &str = "https://gnews.io/api/v4";

/// Client for the GNews search endpoint.
pub struct GnewsClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct GnewsResponse {
    #[serde(default)]
    articles: Vec<GnewsArticle>,
}

#[derive(Debug, Deserialize)]
struct GnewsArticle {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    image: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    source: Option<GnewsSource>,
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GnewsSource {
    name: Option<String>,
}

impl GnewsClient {
    /// Creates a new client pointed at the production GNews API.
    ///
    /// # Errors
    ///
    /// Returns [`AggregateError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, AggregateError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`AggregateError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`AggregateError::Api`] if `base_url` is
    /// not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, AggregateError> {
        Ok(Self {
            client: http_client(timeout_secs)?,
            api_key: api_key.to_owned(),
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// Search articles matching the intent.
    ///
    /// Translates `query` to `q`, `country` to `country`, `page_size` to
    /// `max`, and the sort preference to `sortby=publishedAt|relevance`.
    /// Always requests English results.
    ///
    /// # Errors
    ///
    /// - [`AggregateError::Http`] on network failure or non-2xx status.
    /// - [`AggregateError::Deserialize`] if the response does not match
    ///   the documented shape.
    pub async fn search(&self, params: &FetchParams) -> Result<Vec<Article>, AggregateError> {
        let url = self.search_url(params)?;
        let response: GnewsResponse = get_json(&self.client, url, "gnews /search").await?;
        Ok(response
            .articles
            .into_iter()
            .filter_map(transform_article)
            .collect())
    }

    fn search_url(&self, params: &FetchParams) -> Result<Url, AggregateError> {
        let mut url = Url::parse(&format!("{}/search", self.base_url))
            .map_err(|e| AggregateError::Api(format!("invalid endpoint URL: {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("apikey", &self.api_key);
            pairs.append_pair("lang", "en");
            let sortby = match params.sort {
                SortPreference::Newest => "publishedAt",
                SortPreference::Relevance => "relevance",
            };
            pairs.append_pair("sortby", sortby);
            if let Some(query) = &params.query {
                pairs.append_pair("q", query);
            }
            if let Some(country) = &params.country {
                pairs.append_pair("country", country);
            }
            if let Some(max) = params.page_size {
                pairs.append_pair("max", &max.to_string());
            }
        }
        Ok(url)
    }
}

/// Map one provider record into the canonical shape; country always comes
/// from TLD inference since GNews has no native country field.
fn transform_article(raw: GnewsArticle) -> Option<Article> {
    let url = raw.url.filter(|u| !u.trim().is_empty())?;
    let title = raw.title.filter(|t| !t.trim().is_empty())?;
    let country_code = infer_country(&url);

    Some(Article {
        title,
        description: raw.description.unwrap_or_default(),
        url,
        image_url: raw.image,
        published_at: raw.published_at.unwrap_or_default(),
        source: raw.source.and_then(|s| s.name).unwrap_or_default(),
        content: raw.content,
        country_code,
    })
}
