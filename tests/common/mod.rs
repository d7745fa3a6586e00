// Shared test doubles for the interview engine: adapters that never touch
// the network, plus a builder that wires them into an `Interviewer`.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use case_interviewer::{
    ChatMessage, Interviewer, MemoryStore, Responder, SpeechSynthesizer, TranscriptLog,
    Transcriber,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const MATH_WAIT_SECS: u64 = 10;
pub const FAKE_AUDIO_B64: &str = "ZmFrZS1hdWRpbw==";

/// Returns a fixed transcript for every blob.
pub struct FakeTranscriber {
    pub transcript: String,
}

#[async_trait]
impl Transcriber for FakeTranscriber {
    async fn transcribe(
        &self,
        _audio: Vec<u8>,
        _file_name: &str,
        _mime_type: &str,
    ) -> Result<String> {
        Ok(self.transcript.clone())
    }
}

/// Returns numbered generated questions so tests can tell calls apart.
#[derive(Default)]
pub struct FakeResponder {
    calls: AtomicUsize,
}

#[async_trait]
impl Responder for FakeResponder {
    async fn generate(&self, _history: &[ChatMessage], _directive: &str) -> Result<String> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("Generated question {n}"))
    }
}

/// Returns a constant base64 blob for any text.
pub struct FakeSynthesizer;

#[async_trait]
impl SpeechSynthesizer for FakeSynthesizer {
    async fn synthesize(&self, _text: &str) -> Result<String> {
        Ok(FAKE_AUDIO_B64.to_string())
    }
}

/// Fails every synthesis call, standing in for a speech API outage.
pub struct FailingSynthesizer;

#[async_trait]
impl SpeechSynthesizer for FailingSynthesizer {
    async fn synthesize(&self, _text: &str) -> Result<String> {
        Err(anyhow!("speech API returned 503"))
    }
}

/// An interviewer wired to the fakes above, with the session store exposed
/// for inspection.
pub fn test_interviewer(
    transcripts_dir: &std::path::Path,
) -> (Arc<Interviewer>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let interviewer = Arc::new(Interviewer::new(
        store.clone(),
        Arc::new(FakeTranscriber {
            transcript: "My answer about customer segmentation.".to_string(),
        }),
        Arc::new(FakeResponder::default()),
        Arc::new(FakeSynthesizer),
        TranscriptLog::new(transcripts_dir),
        MATH_WAIT_SECS,
    ));
    (interviewer, store)
}

/// An interviewer whose speech adapter always fails, for exercising the
/// server-fault path.
pub fn broken_synth_interviewer(transcripts_dir: &std::path::Path) -> Arc<Interviewer> {
    Arc::new(Interviewer::new(
        Arc::new(MemoryStore::new()),
        Arc::new(FakeTranscriber {
            transcript: "My answer about customer segmentation.".to_string(),
        }),
        Arc::new(FakeResponder::default()),
        Arc::new(FailingSynthesizer),
        TranscriptLog::new(transcripts_dir),
        MATH_WAIT_SECS,
    ))
}
