use super::SpeechSynthesizer;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde_json::json;

const API_BASE: &str = "https://api.elevenlabs.io/v1/text-to-speech";

/// Text-to-speech client for the ElevenLabs API.
pub struct ElevenLabsSynthesizer {
    client: Client,
    api_key: String,
    voice_id: String,
    model_id: String,
    output_format: String,
}

impl ElevenLabsSynthesizer {
    pub fn new(
        api_key: impl Into<String>,
        voice_id: impl Into<String>,
        model_id: impl Into<String>,
        output_format: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            voice_id: voice_id.into(),
            model_id: model_id.into(),
            output_format: output_format.into(),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<String> {
        let url = format!(
            "{}/{}?output_format={}",
            API_BASE, self.voice_id, self.output_format
        );

        let resp = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .json(&json!({
                "text": text,
                "model_id": self.model_id,
            }))
            .send()
            .await
            .context("Speech synthesis request failed")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("Speech API returned {status}: {body}");
        }

        let audio = resp
            .bytes()
            .await
            .context("Failed to read synthesized audio")?;

        Ok(base64::engine::general_purpose::STANDARD.encode(&audio))
    }
}
