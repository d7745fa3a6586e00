//! HTTP API server for the interview frontend
//!
//! This module provides the REST surface of the interview:
//! - GET /question?session_id= - Fetch the next interviewer question
//! - POST /answer?session_id= - Submit a recorded answer (multipart `file`)
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
