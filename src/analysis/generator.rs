use std::time::Duration;
use thiserror::Error;

/// Which of the two analysis requests a prompt belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Summary,
    Sentiment,
}

/// A single chat completion request: system instruction plus user content
#[derive(Debug, Clone)]
pub struct Prompt {
    pub kind: PromptKind,
    pub system: &'static str,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Failures talking to the text-generation service
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Groq API error: request failed: {0}")]
    Transport(String),

    #[error("Groq API error: request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Groq API error: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("Groq API error: malformed response: {0}")]
    MalformedResponse(String),

    #[error("Groq API error: response contained no message content")]
    MissingContent,

    #[error("Groq API error: unrecognized sentiment label {0:?}")]
    UnrecognizedSentiment(String),
}

/// Text-generation backend trait
///
/// Implementations:
/// - Groq chat completions over HTTPS
/// - In-process stubs (tests)
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run one completion and return the raw message content
    async fn complete(&self, prompt: &Prompt) -> Result<String, AnalysisError>;

    /// Backend name for logging
    fn name(&self) -> &str;
}
