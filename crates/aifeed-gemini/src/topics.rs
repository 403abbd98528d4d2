//! Best-effort topic categorization over a batch of article titles.
//!
//! Sends indexed titles with a fixed six-label taxonomy and a strict
//! JSON-output instruction, then parses the response after stripping any
//! markdown code-fence artifacts the model wraps around it.

use serde::{Deserialize, Serialize};

use crate::best_effort::{BestEffort, FallbackReason};
use crate::client::GeminiClient;

/// The fixed taxonomy, in prompt order. Every article is assigned to
/// exactly one label (best fit); "General AI" is the catch-all.
pub const TAXONOMY: [&str; 6] = [
    "Machine Learning",
    "Generative AI",
    "LLMs",
    "Neural Networks",
    "Ethics & Regulation",
    "General AI",
];

/// A named group of article indices produced by categorization.
///
/// Indices reference positions in the title sequence that was categorized;
/// articles are referenced, never moved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicBucket {
    pub name: String,
    pub article_indices: Vec<usize>,
    pub count: usize,
}

#[derive(Deserialize)]
struct RawTopicResponse {
    #[serde(default)]
    topics: Vec<RawTopic>,
}

#[derive(Deserialize)]
struct RawTopic {
    name: String,
    #[serde(rename = "articleIndices", default)]
    article_indices: Vec<usize>,
}

fn categorize_prompt(titles: &[&str]) -> String {
    let inputs = titles
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{i}. {t}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"Analyze these {count} AI news article titles. Categorize them into exactly these 6 distinct topics:

1. "Machine Learning" (ML trends, algorithms, technical updates)
2. "Generative AI" (Image generation, video gen, creative AI)
3. "LLMs" (Large Language Models, ChatGPT, Gemini, Claude, text generation)
4. "Neural Networks" (Deep learning research, architectures)
5. "Ethics & Regulation" (Safety, policy, laws, bias, societal impact)
6. "General AI" (Broad news, business, industry updates, or anything not fitting above)

For each topic, provide: 1) The exact topic name from the list above, 2) A list of article indices that belong to this topic. Ensure every article is assigned to exactly one category (best fit). Return the response in strictly valid JSON format: {{"topics": [{{"name": "topic name", "articleIndices": [0, 5, 12]}}]}}. Do not include markdown code blocks.

{inputs}"#,
        count = titles.len()
    )
}

/// Categorize a batch of titles into [`TopicBucket`]s.
///
/// Indices outside `0..titles.len()` are discarded during parsing. Returns
/// a fallback when the client is absent, the request fails, or the
/// response is not the expected JSON shape; callers treat fallback as an
/// empty bucket list.
pub async fn categorize_titles(
    client: Option<&GeminiClient>,
    titles: &[&str],
) -> BestEffort<Vec<TopicBucket>> {
    if titles.is_empty() {
        return BestEffort::Produced(Vec::new());
    }
    let Some(client) = client else {
        return BestEffort::Fallback(FallbackReason::Disabled);
    };

    match client.generate_content(&categorize_prompt(titles)).await {
        Ok(text) => parse_topic_response(&text, titles.len()),
        Err(e) => BestEffort::Fallback(e.into()),
    }
}

/// Parse a model response into buckets, stripping code fences first.
fn parse_topic_response(text: &str, title_count: usize) -> BestEffort<Vec<TopicBucket>> {
    let json = strip_code_fences(text);
    match serde_json::from_str::<RawTopicResponse>(&json) {
        Ok(raw) => {
            let buckets = raw
                .topics
                .into_iter()
                .map(|topic| {
                    let article_indices: Vec<usize> = topic
                        .article_indices
                        .into_iter()
                        .filter(|&i| i < title_count)
                        .collect();
                    TopicBucket {
                        name: topic.name,
                        count: article_indices.len(),
                        article_indices,
                    }
                })
                .collect();
            BestEffort::Produced(buckets)
        }
        Err(e) => BestEffort::Fallback(FallbackReason::Unusable(format!(
            "topic JSON parse failed: {e}"
        ))),
    }
}

/// Remove markdown code-fence lines the model sometimes wraps JSON in.
fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}
