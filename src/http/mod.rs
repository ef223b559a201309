//! HTTP API server
//!
//! This module provides the REST surface of the service:
//! - GET / - Landing page with a transcript form
//! - POST /analyze - Summarize and classify a transcript, append it to the call log
//! - GET /health - Health check, reports whether Groq is configured

mod handlers;
mod routes;
mod state;

pub use handlers::{AnalyzeRequest, AnalyzeResponse, HealthResponse};
pub use routes::create_router;
pub use state::AppState;
