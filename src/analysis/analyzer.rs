use super::generator::TextGenerator;
use super::prompts::{sentiment_prompt, summary_prompt};
use super::sentiment::{Sentiment, SentimentPolicy};
use super::transcript::Transcript;
use crate::config::{Config, OperatingMode};
use crate::error::AppError;
use crate::groq::{GroqClient, GroqConfig};
use anyhow::Result;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

const NOT_INITIALIZED: &str = "Groq client not initialized. Check your API key.";

/// Summary and normalized sentiment for one transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub sentiment: Sentiment,
}

/// Turns a transcript into a summary and a sentiment label via two
/// completions against the configured text generator.
pub struct Analyzer {
    mode: OperatingMode,
    /// Only consulted in live mode
    generator: Option<Arc<dyn TextGenerator>>,
    policy: SentimentPolicy,
}

impl Analyzer {
    pub fn new(
        mode: OperatingMode,
        generator: Option<Arc<dyn TextGenerator>>,
        policy: SentimentPolicy,
    ) -> Self {
        Self {
            mode,
            generator,
            policy,
        }
    }

    pub fn live(generator: Arc<dyn TextGenerator>, policy: SentimentPolicy) -> Self {
        Self::new(OperatingMode::Live, Some(generator), policy)
    }

    pub fn mock(policy: SentimentPolicy) -> Self {
        Self::new(OperatingMode::Mock, None, policy)
    }

    /// Build the analyzer for the operating mode chosen at startup
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let policy = cfg.analysis.sentiment_policy;
        let mode = cfg.mode();

        let generator: Option<Arc<dyn TextGenerator>> = match (mode, cfg.api_key()) {
            (OperatingMode::Live, Some(api_key)) => {
                let client = GroqClient::new(GroqConfig::from_settings(&cfg.groq, api_key))?;
                info!(
                    "Analyzer running in live mode (model: {}, policy: {:?})",
                    cfg.groq.model, policy
                );
                Some(Arc::new(client))
            }
            _ => {
                warn!("{} not set; analyzer running in mock mode", crate::config::API_KEY_ENV);
                None
            }
        };

        Ok(Self::new(mode, generator, policy))
    }

    pub fn mode(&self) -> OperatingMode {
        self.mode
    }

    pub fn policy(&self) -> SentimentPolicy {
        self.policy
    }

    /// Summarize, then classify sentiment. Requests run one after the other
    /// and are never retried.
    pub async fn analyze(&self, transcript: &Transcript) -> Result<AnalysisResult, AppError> {
        let generator = match (self.mode, &self.generator) {
            (OperatingMode::Live, Some(generator)) => generator,
            _ => return Err(AppError::Configuration(NOT_INITIALIZED.to_string())),
        };

        debug!(
            "Analyzing transcript ({} bytes) with {}",
            transcript.as_str().len(),
            generator.name()
        );

        let summary = generator
            .complete(&summary_prompt(transcript.as_str()))
            .await?
            .trim()
            .to_string();

        let raw_sentiment = generator
            .complete(&sentiment_prompt(transcript.as_str()))
            .await?;
        let sentiment = self.policy.normalize(&raw_sentiment)?;

        debug!("Raw sentiment {:?} normalized to {}", raw_sentiment.trim(), sentiment);

        Ok(AnalysisResult { summary, sentiment })
    }
}
