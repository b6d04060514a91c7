use serde::Deserialize;

/// Default Gemini model for report synthesis.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Generation parameters for the report pipeline.
#[derive(Deserialize, Clone, Debug)]
pub struct ReportConfig {
    pub model: String,
    pub temperature: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Reads the report configuration.
///
/// Layered sources, later entries win: built-in defaults, an optional
/// `config/report.yaml` next to the working directory, then `PHOENIX_`
/// environment variables (`PHOENIX_MODEL`, `PHOENIX_TEMPERATURE`). With no
/// file and no env vars this returns the defaults.
pub fn read_config() -> Result<ReportConfig, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Message(e.to_string()))?;
    let config_file = base_path.join("config").join("report.yaml");

    config::Config::builder()
        .set_default("model", DEFAULT_MODEL)?
        .set_default("temperature", DEFAULT_TEMPERATURE)?
        .add_source(config::File::from(config_file).required(false))
        .add_source(config::Environment::with_prefix("PHOENIX"))
        .build()?
        .try_deserialize()
}
