//! AI progress-report synthesis.
//!
//! Built around trait abstractions for testability:
//!
//! - [`TextGenerator`] - text-generation backend (Gemini, mocks)
//! - [`SettingsStore`] - the external key-value blob holding [`ReportSettings`]
//!
//! # Example
//!
//! ```ignore
//! use phoenix_core::config::read_config;
//! use phoenix_core::domain::report::{GeminiGenerator, InMemorySettingsStore, ReportService};
//!
//! let config = read_config()?;
//! let generator = GeminiGenerator::new(&config);
//! let service = ReportService::new(generator, InMemorySettingsStore::new());
//!
//! let summary = service.summarize_progress(&project, &logs).await;
//! ```
//!
//! Whatever happens on the wire, `summarize_progress` hands back displayable
//! text and `suggest_checklist_items` a usable list; failures are logged and
//! replaced with fixed fallback values inside the pipeline.

mod service;
mod settings;
mod traits;

pub mod generator;

pub use generator::GeminiGenerator;
pub use service::ReportService;
pub use settings::{
    InMemorySettingsStore, ReportLanguage, ReportSettings, ReportTone, SettingsStore, SETTINGS_KEY,
};
pub use traits::{GenerateError, TextGenerator};
