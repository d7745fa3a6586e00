//! Speech synthesis adapter
//!
//! Every interviewer reply is rendered to audio before it is returned; the
//! result travels to the client as base64 so it can sit inside the JSON
//! response.

mod elevenlabs;

pub use elevenlabs::ElevenLabsSynthesizer;

use anyhow::Result;
use async_trait::async_trait;

/// Renders text to encoded audio, returned as a base64 string.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<String>;
}
