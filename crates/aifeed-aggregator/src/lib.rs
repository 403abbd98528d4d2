//! AI-news aggregation pipeline.
//!
//! Fans out one request to three news providers (NewsData.io, GNews,
//! NewsAPI) concurrently, normalizes each provider's schema into the
//! canonical [`Article`] record, then filters for topical relevance,
//! deduplicates across providers, and ranks the survivors. Individual
//! provider failures are logged and absorbed; the three feed entry points
//! on [`NewsAggregator`] always return a value and never error.

pub mod country;
pub mod dedup;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod providers;
pub mod rank;
pub mod types;

pub use aifeed_core::Article;
pub use dedup::dedup_articles;
pub use error::AggregateError;
pub use filter::RelevancePolicy;
pub use pipeline::NewsAggregator;
pub use rank::rank_articles;
pub use types::{FetchParams, SortPreference};
