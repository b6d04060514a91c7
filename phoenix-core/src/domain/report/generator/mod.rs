//! Text-generation backends.

mod gemini;
#[cfg(test)]
mod mock;

pub use gemini::GeminiGenerator;
#[cfg(test)]
pub use mock::{MockGenerator, MockResponse};
