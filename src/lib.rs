pub mod config;
pub mod http;
pub mod interview;
pub mod llm;
pub mod session;
pub mod stt;
pub mod transcript;
pub mod tts;

pub use config::Config;
pub use http::{create_router, AppState};
pub use interview::{
    advance, AnswerTurn, Event, InterviewError, Interviewer, QuestionTurn, Step, QUAL_EXCHANGES,
};
pub use llm::{ChatClient, Responder};
pub use session::{ChatMessage, InterviewSession, MathStep, MemoryStore, Role, SessionStore, Stage};
pub use stt::{OpenAiTranscriber, Transcriber};
pub use transcript::TranscriptLog;
pub use tts::{ElevenLabsSynthesizer, SpeechSynthesizer};
