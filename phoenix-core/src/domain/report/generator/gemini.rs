//! Gemini text generation using the genai crate.

use async_trait::async_trait;
use genai::chat::{ChatMessage, ChatOptions, ChatRequest};

use crate::config::ReportConfig;
use crate::domain::report::traits::{GenerateError, Result, TextGenerator};

/// Generator backed by Google's Gemini API via the `genai` crate.
///
/// The genai client reads `GEMINI_API_KEY` from the environment. A single
/// non-streaming request per call; no retry, backoff, or timeout beyond what
/// the transport does on its own.
#[derive(Clone)]
pub struct GeminiGenerator {
    client: genai::Client,
    model: String,
    options: ChatOptions,
}

impl GeminiGenerator {
    /// Create a generator with the given model and temperature.
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            client: genai::Client::default(),
            model: config.model.clone(),
            options: ChatOptions::default().with_temperature(config.temperature),
        }
    }

    /// Create from environment; `None` when `GEMINI_API_KEY` is not set.
    pub fn try_from_env(config: &ReportConfig) -> Option<Self> {
        if std::env::var("GEMINI_API_KEY").is_err() {
            return None;
        }
        Some(Self::new(config))
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<Option<String>> {
        let request = ChatRequest::new(vec![ChatMessage::user(prompt)]);

        let response = self
            .client
            .exec_chat(&self.model, request, Some(&self.options))
            .await
            .map_err(|e| GenerateError::Service(e.to_string()))?;

        Ok(response.first_text().map(str::to_string))
    }
}
