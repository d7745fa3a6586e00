use super::machine::{advance, Event, Step};
use super::InterviewError;
use crate::llm::Responder;
use crate::session::SessionStore;
use crate::stt::Transcriber;
use crate::transcript::TranscriptLog;
use crate::tts::SpeechSynthesizer;
use anyhow::Context;
use std::sync::Arc;
use tracing::info;

/// Reply to a question fetch: the interviewer text, its rendered audio
/// (base64), and an optional client-side wait duration.
#[derive(Debug)]
pub struct QuestionTurn {
    pub text: String,
    pub audio: String,
    pub wait_secs: Option<u64>,
}

/// Reply to an answer submission.
#[derive(Debug)]
pub enum AnswerTurn {
    /// The interviewer replied with new content.
    Reply {
        user_transcript: String,
        text: String,
        audio: String,
        wait_secs: Option<u64>,
    },
    /// No reply is defined for the current stage; only the transcript is
    /// returned.
    TranscriptOnly { user_transcript: String },
    /// The interview has concluded; the acknowledgment carries no audio.
    Concluded,
}

/// Orchestrates one interview: loads the session, runs the state machine,
/// and fans out to the transcription, generation, and speech adapters.
///
/// The three external calls within a request are sequential blocking
/// round-trips; adapter failures propagate unwrapped, with no retry
/// policy.
pub struct Interviewer {
    store: Arc<dyn SessionStore>,
    transcriber: Arc<dyn Transcriber>,
    responder: Arc<dyn Responder>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    transcript_log: TranscriptLog,
    math_wait_secs: u64,
}

impl Interviewer {
    pub fn new(
        store: Arc<dyn SessionStore>,
        transcriber: Arc<dyn Transcriber>,
        responder: Arc<dyn Responder>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        transcript_log: TranscriptLog,
        math_wait_secs: u64,
    ) -> Self {
        Self {
            store,
            transcriber,
            responder,
            synthesizer,
            transcript_log,
            math_wait_secs,
        }
    }

    /// Fetch the next interviewer question for a session, creating the
    /// session on first contact.
    pub async fn fetch_question(&self, session_id: &str) -> Result<QuestionTurn, InterviewError> {
        let mut session = self.store.get_or_create(session_id).await;

        let step = advance(&mut session, Event::QuestionFetch, self.math_wait_secs)?;
        let turn = match step {
            Step::Scripted { text, wait_secs } => {
                let audio = self.synthesizer.synthesize(&text).await?;
                QuestionTurn {
                    text,
                    audio,
                    wait_secs,
                }
            }
            Step::Generate { directive } => {
                let text = self.responder.generate(&session.messages, directive).await?;
                session.push_assistant(&text);
                let audio = self.synthesizer.synthesize(&text).await?;
                QuestionTurn {
                    text,
                    audio,
                    wait_secs: None,
                }
            }
            Step::ConcludedAck | Step::TranscriptOnly => {
                return Err(InterviewError::NoQuestionAvailable)
            }
        };

        self.store.put(session).await;
        Ok(turn)
    }

    /// Transcribe a submitted answer, advance the interview, and produce the
    /// interviewer's reply. Unknown session identifiers are rejected.
    pub async fn submit_answer(
        &self,
        session_id: &str,
        audio: Vec<u8>,
        file_name: &str,
        mime_type: &str,
    ) -> Result<AnswerTurn, InterviewError> {
        let mut session = self
            .store
            .get(session_id)
            .await
            .ok_or_else(|| InterviewError::UnknownSession(session_id.to_string()))?;

        let user_transcript = self
            .transcriber
            .transcribe(audio, file_name, mime_type)
            .await?;
        info!("Transcribed answer for session {}: {} chars", session_id, user_transcript.len());

        // Audit trail: write-only, never read back.
        self.transcript_log
            .append(session_id, &user_transcript)
            .context("Failed to append to transcript log")?;

        let step = advance(
            &mut session,
            Event::AnswerSubmitted {
                transcript: &user_transcript,
            },
            self.math_wait_secs,
        )?;

        let turn = match step {
            Step::Scripted { text, wait_secs } => {
                let audio = self.synthesizer.synthesize(&text).await?;
                AnswerTurn::Reply {
                    user_transcript,
                    text,
                    audio,
                    wait_secs,
                }
            }
            Step::Generate { directive } => {
                let text = self.responder.generate(&session.messages, directive).await?;
                session.push_assistant(&text);
                let audio = self.synthesizer.synthesize(&text).await?;
                AnswerTurn::Reply {
                    user_transcript,
                    text,
                    audio,
                    wait_secs: None,
                }
            }
            Step::ConcludedAck => AnswerTurn::Concluded,
            Step::TranscriptOnly => AnswerTurn::TranscriptOnly { user_transcript },
        };

        self.store.put(session).await;
        Ok(turn)
    }
}
