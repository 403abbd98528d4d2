use serde::{Deserialize, Serialize};

/// The canonical normalized article record.
///
/// Every provider adapter maps its native response schema into this shape.
/// Past the adapters, records are immutable value objects: the pipeline
/// filters, deduplicates, and reorders them but never mutates fields.
///
/// Field names serialize as camelCase so presentation consumers see the
/// same JSON shape regardless of which provider a record came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Headline. Non-empty for every record surfaced past an adapter.
    pub title: String,
    /// Summary or teaser text. May be empty.
    #[serde(default)]
    pub description: String,
    /// Canonical link. Primary identity signal; non-empty past an adapter.
    pub url: String,
    /// Lead image, when the provider supplies one.
    pub image_url: Option<String>,
    /// Publication timestamp as the provider reported it. Parsed lazily by
    /// the ranker; formats differ per provider.
    pub published_at: String,
    /// Publisher name or provider-specific source id.
    pub source: String,
    /// Extended body text, when the provider supplies one.
    pub content: Option<String>,
    /// ISO-2 uppercase country code. Always populated by the adapter,
    /// inferred from the URL TLD when the provider omits it.
    pub country_code: String,
}

impl Article {
    /// Concatenated lowercase text blob used by the relevance filter:
    /// title, description, and content joined with spaces.
    #[must_use]
    pub fn text_blob(&self) -> String {
        let mut blob = String::with_capacity(
            self.title.len()
                + self.description.len()
                + self.content.as_ref().map_or(0, String::len)
                + 2,
        );
        blob.push_str(&self.title);
        blob.push(' ');
        blob.push_str(&self.description);
        if let Some(content) = &self.content {
            blob.push(' ');
            blob.push_str(content);
        }
        blob.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> Article {
        Article {
            title: "OpenAI Ships New Model".to_string(),
            description: "A Description".to_string(),
            url: "https://example.com/a".to_string(),
            image_url: None,
            published_at: "2024-06-01T00:00:00Z".to_string(),
            source: "Example".to_string(),
            content: Some("Body TEXT".to_string()),
            country_code: "US".to_string(),
        }
    }

    #[test]
    fn text_blob_is_lowercased_and_joined() {
        let blob = article().text_blob();
        assert_eq!(blob, "openai ships new model a description body text");
    }

    #[test]
    fn text_blob_without_content_omits_trailing_space() {
        let mut a = article();
        a.content = None;
        assert_eq!(a.text_blob(), "openai ships new model a description");
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(article()).expect("serialize");
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("publishedAt").is_some());
        assert!(json.get("countryCode").is_some());
    }
}
