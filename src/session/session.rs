use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::interview::script;

/// Role tag for a conversation entry, serialized the way the chat API
/// expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    Assistant,
    User,
}

/// One entry of the append-only conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Sub-phase within the quantitative portion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathStep {
    /// Problem not yet read out.
    Pending,
    /// Problem read out, waiting for the candidate's answer.
    Posed,
}

/// Top-level phase of the scripted interview. Only ever advances forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Intro,
    Qualitative,
    Math { step: MathStep },
    Done,
    Closing,
}

/// Per-session interview state: the conversation history used as context
/// for the language model, the current stage, and the qualitative exchange
/// counter that gates the transition to the quantitative portion.
#[derive(Debug, Clone)]
pub struct InterviewSession {
    /// Opaque, client-supplied session identifier.
    pub id: String,

    /// Ordered role-tagged conversation history, append-only.
    pub messages: Vec<ChatMessage>,

    /// Current interview stage.
    pub stage: Stage,

    /// Number of qualitative question/answer exchanges completed.
    pub qual_count: u32,

    /// When the session was created.
    pub created_at: DateTime<Utc>,
}

impl InterviewSession {
    /// Create a fresh session seeded with the interviewer role directive and
    /// the case text.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            messages: vec![
                ChatMessage::system(script::SYSTEM_DIRECTIVE),
                ChatMessage::system(script::case_seed()),
            ],
            stage: Stage::Intro,
            qual_count: 0,
            created_at: Utc::now(),
        }
    }

    pub fn push_assistant(&mut self, text: &str) {
        self.messages.push(ChatMessage::assistant(text));
    }

    pub fn push_user(&mut self, text: &str) {
        self.messages.push(ChatMessage::user(text));
    }
}
