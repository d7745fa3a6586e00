use crate::interview::Interviewer;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The interview engine behind both endpoints.
    pub interviewer: Arc<Interviewer>,
}

impl AppState {
    pub fn new(interviewer: Arc<Interviewer>) -> Self {
        Self { interviewer }
    }
}
