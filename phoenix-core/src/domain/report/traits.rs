//! Trait seam between the report service and the text-generation backend.

use async_trait::async_trait;

/// Failures inside the generation backend.
///
/// Never crosses the [`super::ReportService`] boundary: the service absorbs
/// every variant into a fixed fallback value.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("generation request failed: {0}")]
    Service(String),
}

pub type Result<T> = std::result::Result<T, GenerateError>;

/// A text-generation backend (Gemini in production, mocks in tests).
///
/// One prompt in, one non-streaming completion out. `Ok(None)` models a
/// successful response that carried no text, which callers treat differently
/// from a failed request.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Option<String>>;
}
