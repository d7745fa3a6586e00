//! Question generation adapter
//!
//! The state machine decides *when* a question is generated; this trait is
//! the seam through which the generation actually happens, which keeps the
//! engine testable without network access.

mod openai;

pub use openai::ChatClient;

use crate::session::ChatMessage;
use anyhow::Result;
use async_trait::async_trait;

/// Generates the interviewer's next line from the conversation history plus
/// one directive system message.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn generate(&self, history: &[ChatMessage], directive: &str) -> Result<String>;
}
