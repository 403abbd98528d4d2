//! Single-article summarization.

use crate::best_effort::{BestEffort, FallbackReason};
use crate::client::GeminiClient;

fn summary_prompt(title: &str, description: &str) -> String {
    format!(
        "Summarize this AI news article in 2-3 concise sentences, highlighting the key insights: Title: {title}, Description: {description}. Provide a clear, informative summary suitable for quick reading."
    )
}

/// Produce a short summary for one article.
///
/// Falls back when the client is absent, the request fails, or the model
/// returns only whitespace; callers supply their own placeholder text.
pub async fn summarize_article(
    client: Option<&GeminiClient>,
    title: &str,
    description: &str,
) -> BestEffort<String> {
    let Some(client) = client else {
        return BestEffort::Fallback(FallbackReason::Disabled);
    };

    match client
        .generate_content(&summary_prompt(title, description))
        .await
    {
        Ok(text) => {
            let trimmed = text.trim().to_string();
            if trimmed.is_empty() {
                BestEffort::Fallback(FallbackReason::Unusable("empty summary".to_string()))
            } else {
                BestEffort::Produced(trimmed)
            }
        }
        Err(e) => BestEffort::Fallback(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_client_falls_back_as_disabled() {
        let outcome = summarize_article(None, "Title", "Description").await;
        assert_eq!(outcome, BestEffort::Fallback(FallbackReason::Disabled));
    }
}
