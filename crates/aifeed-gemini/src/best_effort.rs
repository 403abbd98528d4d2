//! Tagged result type for assists that degrade instead of failing.

use crate::error::GeminiError;

/// Outcome of a best-effort assist.
///
/// `Produced` carries usable model output; `Fallback` records why the
/// assist degraded so callers can distinguish "model disabled" from "model
/// produced nothing usable" in logs, even though both collapse to the same
/// default value at the public surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BestEffort<T> {
    Produced(T),
    Fallback(FallbackReason),
}

/// Why a best-effort assist fell back to its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// No Gemini credential configured; the assist never ran.
    Disabled,
    /// The request failed in transport or returned an error status.
    Request(String),
    /// The model responded but the output could not be used.
    Unusable(String),
}

impl From<GeminiError> for FallbackReason {
    /// A response that parsed but held no candidate text is model output
    /// we cannot use, not a transport failure.
    fn from(e: GeminiError) -> Self {
        match e {
            GeminiError::EmptyCandidates => FallbackReason::Unusable(e.to_string()),
            other => FallbackReason::Request(other.to_string()),
        }
    }
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::Disabled => write!(f, "gemini disabled (no credential)"),
            FallbackReason::Request(e) => write!(f, "gemini request failed: {e}"),
            FallbackReason::Unusable(e) => write!(f, "gemini output unusable: {e}"),
        }
    }
}

impl<T> BestEffort<T> {
    /// The produced value, or `default` on fallback.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            BestEffort::Produced(value) => value,
            BestEffort::Fallback(_) => default,
        }
    }

    /// The produced value, or `T::default()` on fallback.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or(T::default())
    }

    /// The produced value as `Some`, discarding the fallback reason.
    pub fn into_option(self) -> Option<T> {
        match self {
            BestEffort::Produced(value) => Some(value),
            BestEffort::Fallback(_) => None,
        }
    }

    /// Log the fallback reason (if any) under the given assist name, then
    /// behave like [`BestEffort::unwrap_or_default`].
    pub fn logged_or_default(self, assist: &str) -> T
    where
        T: Default,
    {
        match self {
            BestEffort::Produced(value) => value,
            BestEffort::Fallback(reason) => {
                tracing::warn!(assist, reason = %reason, "assist degraded to default");
                T::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwrap_or_returns_produced_value() {
        let outcome = BestEffort::Produced("rewritten".to_string());
        assert_eq!(outcome.unwrap_or("original".to_string()), "rewritten");
    }

    #[test]
    fn unwrap_or_returns_default_on_fallback() {
        let outcome: BestEffort<String> = BestEffort::Fallback(FallbackReason::Disabled);
        assert_eq!(outcome.unwrap_or("original".to_string()), "original");
    }

    #[test]
    fn empty_candidates_maps_to_unusable() {
        let reason = FallbackReason::from(GeminiError::EmptyCandidates);
        assert!(matches!(reason, FallbackReason::Unusable(_)));
    }

    #[test]
    fn api_error_maps_to_request() {
        let reason = FallbackReason::from(GeminiError::Api("boom".to_string()));
        assert!(matches!(reason, FallbackReason::Request(_)));
    }

    #[test]
    fn into_option_discards_reason() {
        let outcome: BestEffort<Vec<String>> =
            BestEffort::Fallback(FallbackReason::Request("timeout".to_string()));
        assert!(outcome.into_option().is_none());
    }
}
