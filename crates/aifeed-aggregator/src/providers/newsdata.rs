//! NewsData.io adapter (`/api/1/latest`).

use aifeed_core::Article;
use reqwest::Url;
use serde::Deserialize;

use crate::country::infer_country;
use crate::error::AggregateError;
use crate::providers::{get_json, http_client, normalize_base_url};
use crate::types::FetchParams;

const DEFAULT_BASE_URL: &str = "https://newsdata.io/api/1";

/// Client for the NewsData.io `latest` endpoint.
///
/// NewsData is the only provider that tags articles with a native country
/// list; the adapter prefers that over TLD inference.
pub struct NewsDataClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct NewsDataResponse {
    #[serde(default)]
    results: Vec<NewsDataArticle>,
}

#[derive(Debug, Deserialize)]
struct NewsDataArticle {
    title: Option<String>,
    description: Option<String>,
    link: Option<String>,
    image_url: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    source_id: Option<String>,
    content: Option<String>,
    country: Option<Vec<String>>,
}

impl NewsDataClient {
    /// Creates a new client pointed at the production NewsData.io API.
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

    /// Fetch the latest articles matching the intent.
    ///
    /// Always requests English results with provider-side duplicate
    /// removal; translates `query`, `country`, and `category` into the
    /// provider's `q`/`country`/`category` parameters.
    ///
    /// # Errors
    ///
    /// - [`AggregateError::Http`] on network failure or non-2xx status.
    /// - [`AggregateError::Deserialize`] if the response does not match
    ///   the documented shape.
    pub async fn latest(&self, params: &FetchParams) -> Result<Vec<Article>, AggregateError> {
        let url = self.latest_url(params)?;
        let response: NewsDataResponse = get_json(&self.client, url, "newsdata /latest").await?;
        Ok(response
            .results
            .into_iter()
            .filter_map(transform_article)
            .collect())
    }

    fn latest_url(&self, params: &FetchParams) -> Result<Url, AggregateError> {
        let mut url = Url::parse(&format!("{}/latest", self.base_url))
            .map_err(|e| AggregateError::Api(format!("invalid endpoint URL: {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("apikey", &self.api_key);
            pairs.append_pair("language", "en");
            pairs.append_pair("removeduplicate", "1");
            if let Some(query) = &params.query {
                pairs.append_pair("q", query);
            }
            if let Some(country) = &params.country {
                pairs.append_pair("country", country);
            }
            if let Some(category) = &params.category {
                pairs.append_pair("category", category);
            }
        }
        Ok(url)
    }
}

/// Map one provider record into the canonical shape.
///
/// Records without a usable title or link are dropped here so the
/// invariant "every surfaced article has a non-empty url and title" holds
/// at the adapter boundary.
fn transform_article(raw: NewsDataArticle) -> Option<Article> {
    let url = raw.link.filter(|link| !link.trim().is_empty())?;
    let title = raw.title.filter(|title| !title.trim().is_empty())?;
    let country_code = raw
        .country
        .as_ref()
        .and_then(|countries| countries.first())
        .map_or_else(|| infer_country(&url), |code| code.to_uppercase());

    Some(Article {
        title,
        description: raw.description.unwrap_or_default(),
        url,
        image_url: raw.image_url,
        published_at: raw.pub_date.unwrap_or_default(),
        source: raw.source_id.unwrap_or_default(),
        content: raw.content,
        country_code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SortPreference;

    fn test_client(base_url: &str) -> NewsDataClient {
        NewsDataClient::with_base_url("test-key", 20, base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn latest_url_carries_fixed_and_intent_params() {
        let client = test_client("https://newsdata.test/api/1/");
        let params = FetchParams {
            query: Some("artificial intelligence".to_string()),
            country: Some("us,gb".to_string()),
            category: Some("technology".to_string()),
            page_size: None,
            sort: SortPreference::Newest,
        };
        let url = client.latest_url(&params).expect("url should build");
        let rendered = url.as_str();
        assert!(rendered.starts_with("https://newsdata.test/api/1/latest?"));
        assert!(rendered.contains("apikey=test-key"));
        assert!(rendered.contains("language=en"));
        assert!(rendered.contains("removeduplicate=1"));
        assert!(rendered.contains("country=us%2Cgb"));
        assert!(rendered.contains("category=technology"));
    }

    #[test]
    fn transform_prefers_native_country_tag() {
        let raw = NewsDataArticle {
            title: Some("AI in India".to_string()),
            description: None,
            link: Some("https://example.com/a".to_string()),
            image_url: None,
            pub_date: Some("2024-06-01 10:00:00".to_string()),
            source_id: Some("example".to_string()),
            content: None,
            country: Some(vec!["in".to_string()]),
        };
        let article = transform_article(raw).expect("should transform");
        assert_eq!(article.country_code, "IN");
    }

    #[test]
    fn transform_infers_country_when_tag_absent() {
        let raw = NewsDataArticle {
            title: Some("AI in Britain".to_string()),
            description: None,
            link: Some("https://news.co.uk/a".to_string()),
            image_url: None,
            pub_date: None,
            source_id: None,
            content: None,
            country: None,
        };
        let article = transform_article(raw).expect("should transform");
        assert_eq!(article.country_code, "GB");
    }

    #[test]
    fn records_without_title_or_link_are_dropped() {
        let no_link = NewsDataArticle {
            title: Some("Title".to_string()),
            description: None,
            link: None,
            image_url: None,
            pub_date: None,
            source_id: None,
            content: None,
            country: None,
        };
        let blank_title = NewsDataArticle {
            title: Some("   ".to_string()),
            description: None,
            link: Some("https://example.com/a".to_string()),
            image_url: None,
            pub_date: None,
            source_id: None,
            content: None,
            country: None,
        };
        assert!(transform_article(no_link).is_none());
        assert!(transform_article(blank_title).is_none());
    }
}
