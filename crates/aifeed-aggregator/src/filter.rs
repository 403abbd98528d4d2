//! Topical relevance filtering.
//!
//! Broad technology keywords alone let general news through whenever it
//! mentions "tech"; a plain exclusion list throws away true positives like
//! an article on OpenAI policy. The two-tier design below recovers both:
//! an exclusion hit rejects the article unless an unambiguous AI term also
//! appears, and articles with no exclusion hit still need at least one
//! inclusion term.

use aifeed_core::Article;

/// Off-topic signals: general news, sports, conflict, crime, politics.
const EXCLUDED_TERMS: &[&str] = &[
    "football",
    "soccer",
    "basketball",
    "cricket",
    "tennis",
    "nba",
    "nfl",
    "premier league",
    "world cup",
    "olympic",
    "murder",
    "stabbing",
    "shooting",
    "robbery",
    "warfare",
    "military strike",
    "missile",
    "troops",
    "ceasefire",
    "election",
    "senate",
    "parliament",
    "minister",
    "white house",
    "tariff",
    "celebrity",
    "box office",
    "royal family",
    "hurricane",
    "earthquake",
];

/// Unambiguous AI terms that rescue an article from an exclusion hit.
const OVERRIDE_TERMS: &[&str] = &[
    "artificial intelligence",
    "machine learning",
    "large language model",
    "generative ai",
    "neural network",
    "openai",
    "chatgpt",
    "anthropic",
    "claude",
    "deepmind",
    "gemini",
    "llm",
];

/// Broad AI/ML/tech vocabulary for the inclusion tier.
const INCLUDED_TERMS: &[&str] = &[
    "artificial intelligence",
    "machine learning",
    "deep learning",
    "generative ai",
    "large language model",
    "llm",
    "neural network",
    "openai",
    "chatgpt",
    "gpt-4",
    "gpt-5",
    "anthropic",
    "claude",
    "gemini",
    "deepmind",
    "copilot",
    "mistral",
    "llama",
    "hugging face",
    "nvidia",
    "ai model",
    "ai chip",
    "ai agent",
    "ai startup",
    "ai safety",
    "ai policy",
    "ai research",
    "computer vision",
    "natural language processing",
    "data science",
    "robotics",
    "autonomous",
    "algorithm",
    "semiconductor",
    "silicon valley",
    "tech",
];

/// The relevance word lists as a configurable policy table.
///
/// The defaults are hand-tuned; they are the most likely knob to need
/// adjustment, so they live in data rather than logic.
#[derive(Debug, Clone)]
pub struct RelevancePolicy {
    pub excluded: Vec<String>,
    pub overrides: Vec<String>,
    pub included: Vec<String>,
}

impl Default for RelevancePolicy {
    fn default() -> Self {
        let owned = |terms: &[&str]| terms.iter().map(ToString::to_string).collect();
        Self {
            excluded: owned(EXCLUDED_TERMS),
            overrides: owned(OVERRIDE_TERMS),
            included: owned(INCLUDED_TERMS),
        }
    }
}

impl RelevancePolicy {
    /// Decide topical inclusion for one article.
    ///
    /// Pure: depends only on the article's text fields. Matches run over
    /// the case-folded title + description + content blob.
    #[must_use]
    pub fn is_relevant(&self, article: &Article) -> bool {
        let blob = article.text_blob();
        let contains_any =
            |terms: &[String]| terms.iter().any(|term| blob.contains(term.as_str()));

        if contains_any(&self.excluded) {
            return contains_any(&self.overrides);
        }
        contains_any(&self.included)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, description: &str) -> Article {
        Article {
            title: title.to_string(),
            description: description.to_string(),
            url: "https://example.com/a".to_string(),
            image_url: None,
            published_at: "2024-06-01T00:00:00Z".to_string(),
            source: "Example".to_string(),
            content: None,
            country_code: "US".to_string(),
        }
    }

    #[test]
    fn plain_ai_article_is_accepted() {
        let policy = RelevancePolicy::default();
        assert!(policy.is_relevant(&article(
            "OpenAI releases new model",
            "The large language model improves reasoning"
        )));
    }

    #[test]
    fn off_topic_sports_article_is_rejected() {
        let policy = RelevancePolicy::default();
        assert!(!policy.is_relevant(&article(
            "Premier League roundup",
            "A tech-savvy striker scored twice"
        )));
    }

    #[test]
    fn exclusion_hit_with_override_term_is_accepted() {
        let policy = RelevancePolicy::default();
        assert!(policy.is_relevant(&article(
            "Senate hearing on OpenAI",
            "Lawmakers question artificial intelligence safety practices"
        )));
    }

    #[test]
    fn article_without_any_keyword_is_rejected() {
        let policy = RelevancePolicy::default();
        assert!(!policy.is_relevant(&article(
            "Local bakery wins award",
            "Best croissant in town"
        )));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let policy = RelevancePolicy::default();
        assert!(policy.is_relevant(&article("MACHINE LEARNING advances", "")));
    }

    #[test]
    fn predicate_is_pure() {
        let policy = RelevancePolicy::default();
        let a = article("Claude gains new tools", "Anthropic ships an update");
        assert_eq!(policy.is_relevant(&a), policy.is_relevant(&a));
    }

    #[test]
    fn custom_policy_tables_are_honored() {
        let policy = RelevancePolicy {
            excluded: vec!["banned-word".to_string()],
            overrides: vec![],
            included: vec!["quantum".to_string()],
        };
        assert!(policy.is_relevant(&article("Quantum breakthrough", "")));
        assert!(!policy.is_relevant(&article("Quantum banned-word", "")));
    }
}
