//! Article ranking.

use std::cmp::Ordering;

use aifeed_core::Article;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Stable two-tier sort: articles with an image before articles without,
/// then newest `published_at` first within each tier.
///
/// Timestamps are parsed lazily here; anything unparsable orders as the
/// Unix epoch so the comparator stays total and never panics.
#[must_use]
pub fn rank_articles(mut articles: Vec<Article>) -> Vec<Article> {
    articles.sort_by(|a, b| {
        match (a.image_url.is_some(), b.image_url.is_some()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => parse_published(&b.published_at).cmp(&parse_published(&a.published_at)),
        }
    });
    articles
}

/// Parse a provider timestamp into UTC.
///
/// Tries RFC 3339 (GNews, NewsAPI), then NewsData's space-separated
/// `YYYY-MM-DD HH:MM:SS`, then a bare date. Falls back to the Unix epoch.
#[must_use]
pub fn parse_published(raw: &str) -> DateTime<Utc> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return parsed.with_timezone(&Utc);
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return parsed.and_utc();
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = parsed.and_hms_opt(0, 0, 0) {
            return midnight.and_utc();
        }
    }
    DateTime::UNIX_EPOCH
}
