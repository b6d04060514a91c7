//! Mock generator implementation for testing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::report::traits::{GenerateError, Result, TextGenerator};

/// One canned outcome for a [`MockGenerator`] call.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Successful response with text.
    Text(String),
    /// Successful response with no text in the body.
    Empty,
    /// Transport/service failure.
    Failure(String),
}

/// Mock generator with canned outcomes and prompt capture.
///
/// Outcomes are served in sequence, wrapping around if more calls are made
/// than outcomes provided.
#[derive(Clone)]
pub struct MockGenerator {
    responses: Arc<Vec<MockResponse>>,
    call_count: Arc<AtomicUsize>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockGenerator {
    /// Create a mock that always returns the same text.
    pub fn returning(text: impl Into<String>) -> Self {
        Self::with_sequence(vec![MockResponse::Text(text.into())])
    }

    /// Create a mock whose responses carry no text.
    pub fn empty() -> Self {
        Self::with_sequence(vec![MockResponse::Empty])
    }

    /// Create a mock where every call fails.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self::with_sequence(vec![MockResponse::Failure(reason.into())])
    }

    pub fn with_sequence(responses: Vec<MockResponse>) -> Self {
        Self {
            responses: Arc::new(responses),
            call_count: Arc::new(AtomicUsize::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of times `generate` was called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<Option<String>> {
        let idx = self.call_count.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        match &self.responses[idx % self.responses.len()] {
            MockResponse::Text(text) => Ok(Some(text.clone())),
            MockResponse::Empty => Ok(None),
            MockResponse::Failure(reason) => Err(GenerateError::Service(reason.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_responses_in_sequence_and_wraps() {
        let generator = MockGenerator::with_sequence(vec![
            MockResponse::Text("first".to_string()),
            MockResponse::Empty,
        ]);

        assert_eq!(
            generator.generate("a").await.unwrap(),
            Some("first".to_string())
        );
        assert_eq!(generator.generate("b").await.unwrap(), None);
        assert_eq!(
            generator.generate("c").await.unwrap(),
            Some("first".to_string())
        );
        assert_eq!(generator.call_count(), 3);
        assert_eq!(generator.prompts(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn failing_mock_returns_errors() {
        let generator = MockGenerator::failing("boom");
        assert!(generator.generate("x").await.is_err());
    }
}
