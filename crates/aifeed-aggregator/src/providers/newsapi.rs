//! NewsAPI adapter (`/v2/everything` and `/v2/top-headlines`).

use aifeed_core::Article;
use reqwest::Url;
use serde::Deserialize;

use crate::country::infer_country;
use crate::error::AggregateError;
use crate::providers::{get_json, http_client, normalize_base_url};
use crate::types::{FetchParams, SortPreference};

const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";

/// Placeholder title NewsAPI substitutes for withdrawn articles.
const REMOVED_TITLE: &str = "[Removed]";

/// Client for the NewsAPI `everything` and `top-headlines` endpoints.
pub struct NewsApiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    #[serde(default)]
    articles: Vec<NewsApiArticle>,
}

#[derive(Debug, Deserialize)]
struct NewsApiArticle {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    #[serde(rename = "urlToImage")]
    url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    source: Option<NewsApiSource>,
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NewsApiSource {
    name: Option<String>,
}

impl NewsApiClient {
    /// Creates a new client pointed at the production NewsAPI.
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

    /// Keyword search over the full article index.
    ///
    /// Translates `query` to `q`, `page_size` to `pageSize`, and the sort
    /// preference to `sortBy=publishedAt|relevancy`.
    ///
    /// # Errors
    ///
    /// - [`AggregateError::Http`] on network failure or non-2xx status.
    /// - [`AggregateError::Deserialize`] if the response does not match
    ///   the documented shape.
    pub async fn everything(&self, params: &FetchParams) -> Result<Vec<Article>, AggregateError> {
        let url = self.endpoint_url("everything", params, true)?;
        let response: NewsApiResponse = get_json(&self.client, url, "newsapi /everything").await?;
        Ok(Self::collect_articles(response))
    }

    /// Country-scoped headline search; higher country precision than the
    /// full index, used by the per-country feed.
    ///
    /// Translates `country`, `category`, and `page_size`.
    ///
    /// # Errors
    ///
    /// - [`AggregateError::Http`] on network failure or non-2xx status.
    /// - [`AggregateError::Deserialize`] if the response does not match
    ///   the documented shape.
    pub async fn top_headlines(
        &self,
        params: &FetchParams,
    ) -> Result<Vec<Article>, AggregateError> {
        let url = self.endpoint_url("top-headlines", params, false)?;
        let response: NewsApiResponse =
            get_json(&self.client, url, "newsapi /top-headlines").await?;
        Ok(Self::collect_articles(response))
    }

    fn collect_articles(response: NewsApiResponse) -> Vec<Article> {
        response
            .articles
            .into_iter()
            .filter_map(transform_article)
            .collect()
    }

    fn endpoint_url(
        &self,
        endpoint: &str,
        params: &FetchParams,
        with_sort: bool,
    ) -> Result<Url, AggregateError> {
        let mut url = Url::parse(&format!("{}/{endpoint}", self.base_url))
            .map_err(|e| AggregateError::Api(format!("invalid endpoint URL: {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("apiKey", &self.api_key);
            pairs.append_pair("language", "en");
            if let Some(query) = &params.query {
                pairs.append_pair("q", query);
            }
            if let Some(country) = &params.country {
                pairs.append_pair("country", country);
            }
            if let Some(category) = &params.category {
                pairs.append_pair("category", category);
            }
            if let Some(size) = params.page_size {
                pairs.append_pair("pageSize", &size.to_string());
            }
            if with_sort {
                let sort_by = match params.sort {
                    SortPreference::Newest => "publishedAt",
                    SortPreference::Relevance => "relevancy",
                };
                pairs.append_pair("sortBy", sort_by);
            }
        }
        Ok(url)
    }
}

/// Map one provider record into the canonical shape, dropping `[Removed]`
/// placeholders.
fn transform_article(raw: NewsApiArticle) -> Option<Article> {
    let url = raw.url.filter(|u| !u.trim().is_empty())?;
    let title = raw
        .title
        .filter(|t| !t.trim().is_empty() && t != REMOVED_TITLE)?;
    let country_code = infer_country(&url);

    Some(Article {
        title,
        description: raw.description.unwrap_or_default(),
        url,
        image_url: raw.url_to_image,
        published_at: raw.published_at.unwrap_or_default(),
        source: raw.source.and_then(|s| s.name).unwrap_or_default(),
        content: raw.content,
        country_code,
    })
}
