use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub interview: InterviewConfig,
    pub openai: OpenAiConfig,
    pub elevenlabs: ElevenLabsConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct InterviewConfig {
    /// Seconds the client is told to wait before answering the quantitative
    /// problem.
    pub math_wait_secs: u64,
    /// Directory for the per-session transcript audit files.
    pub transcripts_path: String,
}

#[derive(Debug, Deserialize)]
pub struct OpenAiConfig {
    pub chat_model: String,
    pub transcription_model: String,
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct ElevenLabsConfig {
    pub voice_id: String,
    pub model_id: String,
    pub output_format: String,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
