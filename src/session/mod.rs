//! Session state and storage
//!
//! A session holds the conversation history and the interview stage for one
//! candidate. The `SessionStore` trait abstracts the in-memory map so the
//! backing store can later be replaced without touching the state machine.

mod session;
mod store;

pub use session::{ChatMessage, InterviewSession, MathStep, Role, Stage};
pub use store::{MemoryStore, SessionStore};
