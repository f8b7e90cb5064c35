use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub room: RoomConfig,
    pub pipeline: PipelineSettings,
    pub enhancer: EnhancerConfig,
    pub transcript: TranscriptConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RoomConfig {
    /// Room server URL
    pub url: String,
    /// Pipeline backend name (see PipelineFactory)
    pub backend: String,
}

#[derive(Debug, Deserialize)]
pub struct PipelineSettings {
    /// Minimum silence before the turn detector may end a user turn
    pub min_endpointing_delay_secs: f64,
    /// Maximum silence before a user turn is force-ended
    pub max_endpointing_delay_secs: f64,
    /// Spoken once the pipeline is up
    pub greeting: String,
}

#[derive(Debug, Deserialize)]
pub struct EnhancerConfig {
    pub enabled: bool,
    pub model: String,
    /// OpenAI-compatible API base, e.g. "https://api.openai.com/v1"
    pub api_base: String,
    /// Upper bound on a single enhancement call
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
pub struct TranscriptConfig {
    pub output_path: String,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
