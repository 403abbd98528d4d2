//! Cross-provider deduplication.

use std::collections::HashSet;

use aifeed_core::Article;

/// Title prefix length used as a near-duplicate identity key.
const TITLE_KEY_LEN: usize = 50;

/// Remove repeated articles, order-preserving, first seen wins.
///
/// Two independent identity keys per article: the exact URL (catches
/// syndicated reposts of the same link) and the lowercased, trimmed,
/// first-50-character title prefix (catches the same story under different
/// URLs across outlets). An article drops if either key has been seen;
/// both keys of a survivor are recorded.
#[must_use]
pub fn dedup_articles(articles: Vec<Article>) -> Vec<Article> {
    let mut seen: HashSet<String> = HashSet::with_capacity(articles.len() * 2);
    articles
        .into_iter()
        .filter(|article| {
            let url_key = article.url.clone();
            let t_key = title_key(&article.title);
            if seen.contains(&url_key) || seen.contains(&t_key) {
                return false;
            }
            seen.insert(url_key);
            seen.insert(t_key);
            true
        })
        .collect()
}

/// Normalized title identity key: lowercase, trimmed, first 50 chars.
fn title_key(title: &str) -> String {
    title
        .to_lowercase()
        .trim()
        .chars()
        .take(TITLE_KEY_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(url: &str, title: &str) -> Article {
        Article {
            title: title.to_string(),
            description: String::new(),
            url: url.to_string(),
            image_url: None,
            published_at: "2024-06-01T00:00:00Z".to_string(),
            source: "Example".to_string(),
            content: None,
            country_code: "US".to_string(),
        }
    }

    #[test]
    fn identical_urls_collapse_to_first() {
        let input = vec![
            article("https://x.com/a", "OpenAI Ships A Model"),
            article("https://x.com/a", "OPENAI SHIPS A MODEL"),
        ];
        let out = dedup_articles(input);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "OpenAI Ships A Model");
    }

    #[test]
    fn shared_title_prefix_collapses_different_urls() {
        let long_title = "Anthropic announces a new frontier model with extended context windows";
        let input = vec![
            article("https://a.com/1", long_title),
            article("https://b.com/2", &long_title.to_uppercase()),
        ];
        let out = dedup_articles(input);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].url, "https://a.com/1");
    }

    #[test]
    fn distinct_articles_survive_in_order() {
        let input = vec![
            article("https://a.com/1", "First distinct headline about robots"),
            article("https://b.com/2", "Second distinct headline about chips"),
            article("https://c.com/3", "Third distinct headline about policy"),
        ];
        let out = dedup_articles(input.clone());
        assert_eq!(out, input);
    }

    #[test]
    fn dedup_is_idempotent() {
        let input = vec![
            article("https://a.com/1", "Repeated headline about large models"),
            article("https://b.com/2", "Repeated headline about large models!"),
            article("https://c.com/3", "A different story entirely"),
        ];
        let once = dedup_articles(input);
        let twice = dedup_articles(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn titles_shorter_than_prefix_still_key() {
        let input = vec![
            article("https://a.com/1", "  Short  "),
            article("https://b.com/2", "short"),
        ];
        let out = dedup_articles(input);
        assert_eq!(out.len(), 1);
    }
}
