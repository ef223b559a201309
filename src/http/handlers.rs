use super::state::AppState;
use crate::error::ErrorResponse;
use crate::pipeline::CallAnalysis;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

const INDEX_HTML: &str = include_str!("../../static/index.html");

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Raw call transcript; a missing field is treated as empty
    #[serde(default)]
    pub transcript: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub transcript: String,
    pub summary: String,
    pub sentiment: String,
    pub status: String,
    pub timestamp: String,
}

impl From<CallAnalysis> for AnalyzeResponse {
    fn from(analysis: CallAnalysis) -> Self {
        Self {
            transcript: analysis.transcript,
            summary: analysis.summary,
            sentiment: analysis.sentiment.to_string(),
            status: "success".to_string(),
            timestamp: analysis.timestamp,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub groq_configured: bool,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
/// Landing page with the transcript form
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// POST /analyze
/// Summarize a transcript, classify its sentiment and log the result
pub async fn analyze_transcript(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!("Rejected analyze request body: {}", rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: rejection.body_text(),
                }),
            )
                .into_response();
        }
    };

    info!("Analyzing transcript ({} bytes)", req.transcript.len());

    match state.pipeline.process(&req.transcript).await {
        Ok(analysis) => (StatusCode::OK, Json(AnalyzeResponse::from(analysis))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            groq_configured: state.groq_configured(),
        }),
    )
}
