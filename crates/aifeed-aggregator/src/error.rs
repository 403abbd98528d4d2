use thiserror::Error;

/// Errors from the provider adapters and pipeline construction.
///
/// These never escape the feed entry points: the orchestrator absorbs them
/// at its per-provider collection step and logs instead.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Client construction or request building failed.
    #[error("provider API error: {0}")]
    Api(String),

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Gemini client construction failed while building the aggregator.
    #[error("gemini client error: {0}")]
    Gemini(#[from] aifeed_gemini::GeminiError),
}
