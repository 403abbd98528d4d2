//! Trend insights over a batch of recent headlines.

use std::sync::OnceLock;

use regex::Regex;

use crate::best_effort::{BestEffort, FallbackReason};
use crate::client::GeminiClient;

/// Headlines sent per insights request.
const MAX_TITLES: usize = 20;

fn bullet_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*(?:[-*\u{2022}]|\d+[.)])\s*(.+)$").expect("bullet pattern is valid")
    })
}

fn insights_prompt(titles: &[&str]) -> String {
    let list = titles
        .iter()
        .take(MAX_TITLES)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Based on these recent AI news headlines, identify 3 key trends or themes:\n{list}\nProvide 3 bullet points of key insights."
    )
}

/// Extract trend bullets from up to [`MAX_TITLES`] headlines.
///
/// Returns one string per bullet or numbered line in the model output.
/// Falls back when the client is absent, the request fails, or no line
/// looks like a bullet; callers treat fallback as an empty list.
pub async fn key_insights(
    client: Option<&GeminiClient>,
    titles: &[&str],
) -> BestEffort<Vec<String>> {
    if titles.is_empty() {
        return BestEffort::Produced(Vec::new());
    }
    let Some(client) = client else {
        return BestEffort::Fallback(FallbackReason::Disabled);
    };

    match client.generate_content(&insights_prompt(titles)).await {
        Ok(text) => {
            let bullets = parse_insight_bullets(&text);
            if bullets.is_empty() {
                BestEffort::Fallback(FallbackReason::Unusable(
                    "no bullet lines in response".to_string(),
                ))
            } else {
                BestEffort::Produced(bullets)
            }
        }
        Err(e) => BestEffort::Fallback(e.into()),
    }
}

/// Pull the text of every bullet or numbered line out of a model response.
fn parse_insight_bullets(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            bullet_pattern()
                .captures(line)
                .map(|caps| caps[1].trim().to_string())
        })
        .filter(|line| !line.is_empty())
        .collect()
}
