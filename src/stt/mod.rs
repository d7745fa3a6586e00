//! Speech-to-text adapter
//!
//! One request per submitted answer: the recorded blob goes out, plain text
//! comes back. No streaming, no chunking.

mod openai;

pub use openai::OpenAiTranscriber;

use anyhow::Result;
use async_trait::async_trait;

/// Transcribes one complete recorded audio blob.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: Vec<u8>, file_name: &str, mime_type: &str)
        -> Result<String>;
}
