use crate::analysis::{Analyzer, Sentiment, Transcript};
use crate::error::AppError;
use crate::recorder::{CallLog, LogRecord, TIMESTAMP_FORMAT};
use chrono::Local;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Outcome of analyzing (and possibly recording) one call
#[derive(Debug, Clone, Serialize)]
pub struct CallAnalysis {
    pub transcript: String,
    pub summary: String,
    pub sentiment: Sentiment,
    pub timestamp: String,
}

/// Validate → analyze → record, in that order
pub struct CallPipeline {
    analyzer: Arc<Analyzer>,
    log: Option<CallLog>,
}

impl CallPipeline {
    pub fn new(analyzer: Arc<Analyzer>, log: CallLog) -> Self {
        Self {
            analyzer,
            log: Some(log),
        }
    }

    /// Analyze without touching the call log
    pub fn without_recording(analyzer: Arc<Analyzer>) -> Self {
        Self {
            analyzer,
            log: None,
        }
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    pub fn log(&self) -> Option<&CallLog> {
        self.log.as_ref()
    }

    pub async fn process(&self, raw_transcript: &str) -> Result<CallAnalysis, AppError> {
        let transcript = Transcript::parse(raw_transcript)?;

        let result = self.analyzer.analyze(&transcript).await?;

        if let Some(log) = &self.log {
            let record = LogRecord::new(transcript.as_str(), &result.summary, result.sentiment);
            log.append_async(record).await?;
        }

        info!("Analyzed call: sentiment {}", result.sentiment);

        Ok(CallAnalysis {
            transcript: transcript.into_inner(),
            summary: result.summary,
            sentiment: result.sentiment,
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        })
    }
}
