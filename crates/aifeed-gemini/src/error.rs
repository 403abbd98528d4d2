use thiserror::Error;

/// Errors from the Gemini `generateContent` client.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Client construction or request building failed.
    #[error("Gemini API error: {0}")]
    Api(String),

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response parsed but carried no candidate text.
    #[error("Gemini returned no candidate text")]
    EmptyCandidates,
}
