pub mod analysis;
pub mod config;
pub mod error;
pub mod groq;
pub mod http;
pub mod pipeline;
pub mod recorder;

pub use analysis::{
    AnalysisError, AnalysisResult, Analyzer, Prompt, PromptKind, Sentiment, SentimentPolicy,
    TextGenerator, Transcript,
};
pub use config::{Config, OperatingMode};
pub use error::{AppError, ErrorResponse};
pub use groq::{GroqClient, GroqConfig};
pub use http::{create_router, AppState};
pub use pipeline::{CallAnalysis, CallPipeline};
pub use recorder::{CallLog, LogRecord, LogSchema, RecorderError};
