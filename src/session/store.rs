use super::session::InterviewSession;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::info;

/// Storage abstraction for interview sessions, keyed by the opaque
/// client-supplied identifier. Kept behind a trait so a durable or
/// concurrency-safe backing store can be swapped in later.
///
/// Note the interface is get/create/update: a request reads a session out,
/// mutates its copy, and writes it back. Concurrent submissions for the
/// same identifier can therefore race on the counters, a known gap of the
/// in-memory design, not a guarantee.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Look up an existing session.
    async fn get(&self, id: &str) -> Option<InterviewSession>;

    /// Look up a session, creating a freshly seeded one if the identifier
    /// has not been seen before.
    async fn get_or_create(&self, id: &str) -> InterviewSession;

    /// Write a session back under its identifier.
    async fn put(&self, session: InterviewSession);
}

/// In-memory session store. No eviction, no persistence; sessions live for
/// the lifetime of the process.
#[derive(Default)]
pub struct MemoryStore {
    sessions: RwLock<HashMap<String, InterviewSession>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions currently held.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn get(&self, id: &str) -> Option<InterviewSession> {
        self.sessions.read().await.get(id).cloned()
    }

    async fn get_or_create(&self, id: &str) -> InterviewSession {
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(id.to_string())
            .or_insert_with(|| {
                info!("Creating interview session: {}", id);
                InterviewSession::new(id)
            })
            .clone()
    }

    async fn put(&self, session: InterviewSession) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id.clone(), session);
    }
}
