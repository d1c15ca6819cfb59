//! Character source trait

use std::time::Duration;
use storychar_core::RawCharacter;

/// Result type for source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Source error types
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("unexpected status: {0}")]
    BadStatus(u16),

    #[error("timed out after {0:?}")]
    TimedOut(Duration),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}

/// A place characters come from. Implementations report transport and
/// parse failures through [`SourceError`]; field-level gaps stay in the
/// returned [`RawCharacter`] for the caller to normalize.
#[async_trait::async_trait]
pub trait CharacterSource: Send + Sync {
    /// Label used in diagnostics when a fetch fails.
    fn name(&self) -> &str;

    /// Fetch one raw character. Exactly one attempt per call.
    async fn fetch(&self) -> SourceResult<RawCharacter>;
}
