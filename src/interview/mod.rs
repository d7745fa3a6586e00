//! The interview state machine and the engine that drives it
//!
//! `advance` is the exhaustive transition function over the five interview
//! stages; `Interviewer` wires it to the session store and the three
//! external adapters (transcription, generation, speech synthesis).

mod engine;
mod machine;
pub mod script;

pub use engine::{AnswerTurn, Interviewer, QuestionTurn};
pub use machine::{advance, Event, Step, QUAL_EXCHANGES};

use thiserror::Error;

/// Failure modes of one interview operation. The first two are client
/// errors; adapter failures are server faults.
#[derive(Debug, Error)]
pub enum InterviewError {
    #[error("invalid session: {0}")]
    UnknownSession(String),

    #[error("no question available")]
    NoQuestionAvailable,

    #[error(transparent)]
    Adapter(#[from] anyhow::Error),
}

impl InterviewError {
    /// Whether the error is the caller's fault (as opposed to a failed
    /// external call).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            InterviewError::UnknownSession(_) | InterviewError::NoQuestionAvailable
        )
    }
}
