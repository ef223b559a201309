//! Transcript analysis
//!
//! This module turns a validated call transcript into an [`AnalysisResult`]:
//! - `transcript`: input validation (trimmed, at least 20 characters)
//! - `prompts`: the fixed summary and sentiment instructions
//! - `generator`: the text-generation backend trait and its error type
//! - `sentiment`: the closed label set and the normalization policies
//! - `analyzer`: orchestration of the two completions

mod analyzer;
mod generator;
mod prompts;
mod sentiment;
mod transcript;

pub use analyzer::{AnalysisResult, Analyzer};
pub use generator::{AnalysisError, Prompt, PromptKind, TextGenerator};
pub use prompts::{sentiment_prompt, summary_prompt, SENTIMENT_MAX_TOKENS, SUMMARY_MAX_TOKENS};
pub use sentiment::{Sentiment, SentimentPolicy, UnknownSentiment};
pub use transcript::{Transcript, MIN_TRANSCRIPT_CHARS};
