//! Google Gemini client and the best-effort text assists built on it.
//!
//! Everything in this crate is enrichment, never a correctness-critical
//! path: query rewriting, topic categorization, trend insights, and article
//! summaries all degrade to a caller-supplied default via [`BestEffort`]
//! when the credential is missing, the request fails, or the model output
//! is unusable. The reason for a fallback is preserved so callers can log
//! why the assist degraded.

pub mod best_effort;
pub mod client;
pub mod error;
pub mod insights;
pub mod optimizer;
pub mod summary;
pub mod topics;

pub use best_effort::{BestEffort, FallbackReason};
pub use client::GeminiClient;
pub use error::GeminiError;
pub use insights::key_insights;
pub use optimizer::optimize_query;
pub use summary::summarize_article;
pub use topics::{categorize_titles, TopicBucket, TAXONOMY};
