//! Search query rewriting.
//!
//! Rewrites free text into a provider-friendly boolean search expression
//! (synonym expansion, OR-joining). Optimization is strictly best-effort:
//! the caller falls back to the raw query on any [`BestEffort::Fallback`].

use crate::best_effort::{BestEffort, FallbackReason};
use crate::client::GeminiClient;

fn rewrite_prompt(query: &str) -> String {
    format!(
        r#"Act as an expert search query optimizer for a technical AI news database. Convert the following user input into a precise, high-quality Boolean search string for a News API.
User Input: "{query}"

Rules:
1. Expand with relevant technical synonyms (e.g., "AI" -> "Artificial Intelligence").
2. Use OR operators for related terms.
3. Keep it concise but comprehensive.
4. Return ONLY the search string. No explanations.

Example:
Input: "robots"
Output: "robotics" OR "robots" OR "humanoid" OR "Boston Dynamics""#
    )
}

/// Rewrite `query` into a boolean search expression.
///
/// Quote characters are stripped from the model output and the result is
/// trimmed. Returns a fallback when the client is absent, the request
/// fails, or the cleaned output is empty.
pub async fn optimize_query(client: Option<&GeminiClient>, query: &str) -> BestEffort<String> {
    let Some(client) = client else {
        return BestEffort::Fallback(FallbackReason::Disabled);
    };

    match client.generate_content(&rewrite_prompt(query)).await {
        Ok(text) => {
            let cleaned = clean_rewrite(&text);
            if cleaned.is_empty() {
                BestEffort::Fallback(FallbackReason::Unusable("empty rewrite".to_string()))
            } else {
                tracing::debug!(original = query, rewritten = %cleaned, "query optimized");
                BestEffort::Produced(cleaned)
            }
        }
        Err(e) => BestEffort::Fallback(e.into()),
    }
}

/// Strip quote characters and surrounding whitespace from a model rewrite.
fn clean_rewrite(text: &str) -> String {
    text.replace('"', "").trim().to_string()
}
