// Shared helpers for integration tests
#![allow(dead_code)]

use call_insights::{AnalysisError, Prompt, PromptKind, TextGenerator};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Text generator that answers from canned replies instead of calling Groq
pub struct StubGenerator {
    summary: String,
    sentiment: String,
    fail: bool,
    calls: AtomicUsize,
}

impl StubGenerator {
    pub fn new(summary: &str, sentiment: &str) -> Self {
        Self {
            summary: summary.to_string(),
            sentiment: sentiment.to_string(),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Every completion fails as if Groq were unreachable
    pub fn unreachable() -> Self {
        Self {
            fail: true,
            ..Self::new("", "")
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TextGenerator for StubGenerator {
    async fn complete(&self, prompt: &Prompt) -> Result<String, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AnalysisError::Transport("connection refused".to_string()));
        }
        Ok(match prompt.kind {
            PromptKind::Summary => self.summary.clone(),
            PromptKind::Sentiment => self.sentiment.clone(),
        })
    }

    fn name(&self) -> &str {
        "stub"
    }
}

pub const BILLING_TRANSCRIPT: &str =
    "Customer called about a billing error and was very upset but the agent resolved it quickly.";

pub const BILLING_SUMMARY: &str = "Customer reported a billing error; agent resolved it quickly.";
