//! Common fetch intent shared by all provider adapters.

/// Sort preference for providers that support native result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortPreference {
    /// Newest first.
    #[default]
    Newest,
    /// Provider-native relevance ranking.
    Relevance,
}

/// Provider-agnostic fetch intent.
///
/// Each adapter translates these fields into its own parameter vocabulary
/// (`q`/`country`/`category`/`max`/`pageSize`/`sortby`/`sortBy`…) and
/// ignores the ones its endpoint does not support.
#[derive(Debug, Clone, Default)]
pub struct FetchParams {
    /// Free-text or boolean search query.
    pub query: Option<String>,
    /// Lowercase ISO-2 country code, or a comma list for providers that
    /// accept one.
    pub country: Option<String>,
    /// Category name, or a comma list for providers that accept one.
    pub category: Option<String>,
    /// Maximum result count hint.
    pub page_size: Option<usize>,
    /// Result ordering, where the provider supports a choice.
    pub sort: SortPreference,
}

impl FetchParams {
    /// Intent carrying only a query string.
    #[must_use]
    pub fn for_query(query: &str) -> Self {
        Self {
            query: Some(query.to_string()),
            ..Self::default()
        }
    }
}
