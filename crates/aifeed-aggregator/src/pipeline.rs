//! Aggregation orchestration.
//!
//! One invocation fans out to the three provider adapters concurrently,
//! absorbs per-provider failures, then runs the merged results through
//! filter → dedup → rank. The three feed entry points are thin
//! parameterizations of that same shape and never return an error: total
//! provider failure yields an empty vector, which callers must treat as
//! "no results".

use std::future::Future;

use aifeed_core::{Article, FeedConfig};
use aifeed_gemini::{
    categorize_titles, key_insights, optimize_query, summarize_article, BestEffort, GeminiClient,
    TopicBucket,
};

use crate::dedup::dedup_articles;
use crate::error::AggregateError;
use crate::filter::RelevancePolicy;
use crate::providers::{GnewsClient, NewsApiClient, NewsDataClient};
use crate::rank::rank_articles;
use crate::types::{FetchParams, SortPreference};

/// Hand-tuned boolean keyword expression used by the global and
/// per-country feeds.
pub const AI_STRICT_QUERY: &str = r#""artificial intelligence" OR "machine learning" OR "generative AI" OR "large language model" OR "LLM" OR "OpenAI" OR "Anthropic" OR "DeepMind" OR "Google Gemini" OR "Claude AI" OR "Perplexity AI" OR "Meta Llama" OR "AI Agents" OR "Multimodal AI" OR "Reasoning Models" OR "Neural Network" OR "NVIDIA H100" OR "NVIDIA B200" OR "AI Chips" OR "TPU" OR "Neural Engine" OR "Hugging Face" OR "Mistral AI" OR "Open Source LLMs" OR "Local AI""#;

/// Fallback text for [`NewsAggregator::summarize`].
const SUMMARY_UNAVAILABLE: &str = "Summary unavailable.";

/// The aggregation orchestrator.
///
/// Holds one optional client per upstream service; a `None` slot is a
/// disabled provider (missing credential), which contributes an empty
/// result identically to a failed one.
pub struct NewsAggregator {
    newsdata: Option<NewsDataClient>,
    gnews: Option<GnewsClient>,
    newsapi: Option<NewsApiClient>,
    gemini: Option<GeminiClient>,
    policy: RelevancePolicy,
}

impl NewsAggregator {
    /// Build an aggregator from configuration, constructing a client for
    /// each service whose credential is present.
    ///
    /// # Errors
    ///
    /// Returns [`AggregateError`] if an HTTP client cannot be constructed.
    pub fn from_config(config: &FeedConfig) -> Result<Self, AggregateError> {
        let timeout = config.request_timeout_secs;
        let newsdata = config
            .newsdata_api_key
            .as_deref()
            .map(|key| NewsDataClient::new(key, timeout))
            .transpose()?;
        let gnews = config
            .gnews_api_key
            .as_deref()
            .map(|key| GnewsClient::new(key, timeout))
            .transpose()?;
        let newsapi = config
            .newsapi_api_key
            .as_deref()
            .map(|key| NewsApiClient::new(key, timeout))
            .transpose()?;
        let gemini = config
            .gemini_api_key
            .as_deref()
            .map(|key| GeminiClient::new(key, timeout))
            .transpose()?;

        tracing::info!(
            newsdata = newsdata.is_some(),
            gnews = gnews.is_some(),
            newsapi = newsapi.is_some(),
            gemini = gemini.is_some(),
            "aggregator configured"
        );

        Ok(Self::with_clients(newsdata, gnews, newsapi, gemini))
    }

    /// Build an aggregator from pre-constructed clients. Used by tests to
    /// inject wiremock-backed clients and disabled slots.
    #[must_use]
    pub fn with_clients(
        newsdata: Option<NewsDataClient>,
        gnews: Option<GnewsClient>,
        newsapi: Option<NewsApiClient>,
        gemini: Option<GeminiClient>,
    ) -> Self {
        Self {
            newsdata,
            gnews,
            newsapi,
            gemini,
            policy: RelevancePolicy::default(),
        }
    }

    /// Replace the relevance policy table.
    #[must_use]
    pub fn with_policy(mut self, policy: RelevancePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Global AI-news feed: all providers queried with the hand-tuned
    /// keyword expression, NewsData with extra country/category breadth.
    pub async fn global_feed(&self, page_size: usize) -> Vec<Article> {
        let newsdata_params = FetchParams {
            query: Some("Artificial Intelligence,LLM,Gemini,Claude,Chatgpt,Ai Models".to_string()),
            country: Some("us,gb,ae,in,fr".to_string()),
            category: Some("technology,science,health,environment,education".to_string()),
            ..FetchParams::default()
        };
        let gnews_params = FetchParams {
            page_size: Some(page_size),
            ..FetchParams::for_query(AI_STRICT_QUERY)
        };
        let newsapi_params = FetchParams {
            page_size: Some(page_size),
            sort: SortPreference::Newest,
            ..FetchParams::for_query(AI_STRICT_QUERY)
        };

        self.fan_out(
            self.newsdata.as_ref().map(|c| c.latest(&newsdata_params)),
            self.gnews.as_ref().map(|c| c.search(&gnews_params)),
            self.newsapi.as_ref().map(|c| c.everything(&newsapi_params)),
        )
        .await
    }

    /// Keyword search across all providers, with the query first passed
    /// through the Gemini optimizer. On any optimizer fallback the raw
    /// query is used unchanged.
    pub async fn search(&self, query: &str, page_size: usize) -> Vec<Article> {
        let original = query.trim();
        let final_query = match optimize_query(self.gemini.as_ref(), original).await {
            BestEffort::Produced(rewritten) => rewritten,
            BestEffort::Fallback(reason) => {
                tracing::debug!(query = original, reason = %reason, "searching with raw query");
                original.to_string()
            }
        };

        let newsdata_params = FetchParams::for_query(&final_query);
        let gnews_params = FetchParams {
            page_size: Some(page_size),
            sort: SortPreference::Relevance,
            ..FetchParams::for_query(&final_query)
        };
        let newsapi_params = FetchParams {
            page_size: Some(page_size),
            sort: SortPreference::Relevance,
            ..FetchParams::for_query(&final_query)
        };

        self.fan_out(
            self.newsdata.as_ref().map(|c| c.latest(&newsdata_params)),
            self.gnews.as_ref().map(|c| c.search(&gnews_params)),
            self.newsapi.as_ref().map(|c| c.everything(&newsapi_params)),
        )
        .await
    }

    /// Per-country AI-news feed. NewsAPI is queried through
    /// `top-headlines` for better country precision.
    pub async fn country_feed(
        &self,
        country_code: &str,
        country_name: &str,
        page_size: usize,
    ) -> Vec<Article> {
        let code = country_code.to_lowercase();
        tracing::info!(country = %code, name = country_name, "fetching country feed");

        let newsdata_params = FetchParams {
            query: Some("Artificial Intelligence, Global Tech".to_string()),
            country: Some(code.clone()),
            ..FetchParams::default()
        };
        let gnews_params = FetchParams {
            country: Some(code.clone()),
            page_size: Some(page_size),
            ..FetchParams::for_query(AI_STRICT_QUERY)
        };
        let newsapi_params = FetchParams {
            country: Some(code),
            category: Some("technology".to_string()),
            page_size: Some(page_size),
            ..FetchParams::default()
        };

        self.fan_out(
            self.newsdata.as_ref().map(|c| c.latest(&newsdata_params)),
            self.gnews.as_ref().map(|c| c.search(&gnews_params)),
            self.newsapi
                .as_ref()
                .map(|c| c.top_headlines(&newsapi_params)),
        )
        .await
    }

    /// Best-effort topic buckets for an article batch. Empty on fallback.
    pub async fn topics(&self, articles: &[Article]) -> Vec<TopicBucket> {
        let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
        categorize_titles(self.gemini.as_ref(), &titles)
            .await
            .logged_or_default("topic_categorizer")
    }

    /// Best-effort trend bullets over an article batch. Empty on fallback.
    pub async fn insights(&self, articles: &[Article]) -> Vec<String> {
        let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
        key_insights(self.gemini.as_ref(), &titles)
            .await
            .logged_or_default("key_insights")
    }

    /// Best-effort short summary for one article.
    pub async fn summarize(&self, article: &Article) -> String {
        summarize_article(self.gemini.as_ref(), &article.title, &article.description)
            .await
            .unwrap_or(SUMMARY_UNAVAILABLE.to_string())
    }

    /// Fan out to the three adapters concurrently, absorb failures, and
    /// run filter → dedup → rank over the merged results.
    async fn fan_out<Fnd, Fgn, Fna>(
        &self,
        newsdata: Option<Fnd>,
        gnews: Option<Fgn>,
        newsapi: Option<Fna>,
    ) -> Vec<Article>
    where
        Fnd: Future<Output = Result<Vec<Article>, AggregateError>>,
        Fgn: Future<Output = Result<Vec<Article>, AggregateError>>,
        Fna: Future<Output = Result<Vec<Article>, AggregateError>>,
    {
        let (from_newsdata, from_gnews, from_newsapi) = tokio::join!(
            settle("newsdata", newsdata),
            settle("gnews", gnews),
            settle("newsapi", newsapi),
        );

        let mut merged = from_newsdata;
        merged.extend(from_gnews);
        merged.extend(from_newsapi);
        let raw = merged.len();

        merged.retain(|article| self.policy.is_relevant(article));
        let relevant = merged.len();

        let unique = dedup_articles(merged);
        let ranked = rank_articles(unique);

        tracing::info!(raw, relevant, unique = ranked.len(), "aggregation complete");
        ranked
    }
}

/// Await one adapter call, converting "disabled" and "failed" into an
/// empty result. The distinction survives only in the log stream.
async fn settle<F>(provider: &'static str, call: Option<F>) -> Vec<Article>
where
    F: Future<Output = Result<Vec<Article>, AggregateError>>,
{
    let Some(future) = call else {
        tracing::debug!(provider, "provider disabled, skipping");
        return Vec::new();
    };
    match future.await {
        Ok(articles) => {
            tracing::debug!(provider, count = articles.len(), "provider fetch succeeded");
            articles
        }
        Err(e) => {
            tracing::warn!(provider, error = %e, "provider fetch failed, continuing without it");
            Vec::new()
        }
    }
}
