//! Integration tests for the Gemini client and assists using wiremock.

use aifeed_gemini::{
    categorize_titles, key_insights, optimize_query, summarize_article, BestEffort, FallbackReason,
    GeminiClient,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> GeminiClient {
    GeminiClient::with_base_url("test-key", 20, base_url)
        .expect("client construction should not fail")
}

fn candidate_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

#[tokio::test]
async fn generate_content_returns_first_candidate_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-pro:generateContent"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("hello there")))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let text = client
        .generate_content("say hello")
        .await
        .expect("should return candidate text");
    assert_eq!(text, "hello there");
}

#[tokio::test]
async fn optimize_query_strips_quotes_from_rewrite() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body(
            "\"robotics\" OR \"robots\" OR \"humanoid\"",
        )))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = optimize_query(Some(&client), "robots").await;
    assert_eq!(
        outcome,
        BestEffort::Produced("robotics OR robots OR humanoid".to_string())
    );
}

#[tokio::test]
async fn optimize_query_falls_back_on_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = optimize_query(Some(&client), "robots").await;
    assert!(matches!(
        outcome,
        BestEffort::Fallback(FallbackReason::Request(_))
    ));
}

#[tokio::test]
async fn categorize_titles_parses_fenced_json() {
    let server = MockServer::start().await;

    let fenced = "```json\n{\"topics\": [{\"name\": \"LLMs\", \"articleIndices\": [0, 1]}]}\n```";
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body(fenced)))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome =
        categorize_titles(Some(&client), &["GPT-5 launches", "Claude gains vision"]).await;

    let BestEffort::Produced(buckets) = outcome else {
        panic!("expected produced buckets, got {outcome:?}");
    };
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].name, "LLMs");
    assert_eq!(buckets[0].article_indices, vec![0, 1]);
    assert_eq!(buckets[0].count, 2);
}

#[tokio::test]
async fn categorize_titles_falls_back_on_non_json_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(candidate_body("I cannot categorize these.")),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = categorize_titles(Some(&client), &["A headline"]).await;
    assert!(matches!(
        outcome,
        BestEffort::Fallback(FallbackReason::Unusable(_))
    ));
}

#[tokio::test]
async fn key_insights_extracts_bullets() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body(
            "- Agents go mainstream\n- Chips are the bottleneck\n- Policy catches up",
        )))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = key_insights(Some(&client), &["headline one", "headline two"]).await;

    let BestEffort::Produced(bullets) = outcome else {
        panic!("expected produced bullets, got {outcome:?}");
    };
    assert_eq!(bullets.len(), 3);
    assert_eq!(bullets[0], "Agents go mainstream");
}

#[tokio::test]
async fn summarize_article_trims_model_output() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body(
            "  Reasoning models improved sharply this week.  \n",
        )))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = summarize_article(Some(&client), "Models improve", "A banner week").await;
    assert_eq!(
        outcome,
        BestEffort::Produced("Reasoning models improved sharply this week.".to_string())
    );
}

#[tokio::test]
async fn whitespace_only_summary_is_unusable() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("   \n  ")))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = summarize_article(Some(&client), "Title", "Description").await;
    assert!(matches!(
        outcome,
        BestEffort::Fallback(FallbackReason::Unusable(_))
    ));
}

#[tokio::test]
async fn empty_candidate_list_is_unusable_output() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = optimize_query(Some(&client), "robots").await;
    assert!(matches!(
        outcome,
        BestEffort::Fallback(FallbackReason::Unusable(_))
    ));
}
