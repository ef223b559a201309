use super::messages::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::analysis::{AnalysisError, Prompt, TextGenerator};
use crate::config::GroqSettings;
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Connection settings for the Groq chat completions API
#[derive(Clone)]
pub struct GroqConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub timeout: Duration,
}

impl GroqConfig {
    pub fn from_settings(settings: &GroqSettings, api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            api_base: settings.api_base.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            timeout: settings.timeout(),
        }
    }
}

// Keeps the key out of debug logs
impl std::fmt::Debug for GroqConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqConfig")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

pub struct GroqClient {
    client: Client,
    config: GroqConfig,
}

impl GroqClient {
    pub fn new(config: GroqConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        info!("Groq client ready ({}, model {})", config.api_base, config.model);

        Ok(Self { client, config })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.api_base)
    }

    fn request_error(&self, err: reqwest::Error) -> AnalysisError {
        if err.is_timeout() {
            AnalysisError::Timeout(self.config.timeout)
        } else {
            AnalysisError::Transport(err.to_string())
        }
    }
}

#[async_trait::async_trait]
impl TextGenerator for GroqClient {
    async fn complete(&self, prompt: &Prompt) -> Result<String, AnalysisError> {
        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            temperature: prompt.temperature,
            max_tokens: prompt.max_tokens,
        };

        debug!("Requesting {:?} completion from {}", prompt.kind, self.config.model);

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.request_error(e))?;

        if !status.is_success() {
            return Err(AnalysisError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_completion(&body)
    }

    fn name(&self) -> &str {
        "groq"
    }
}

/// Pull the first choice's message content out of a completion body
fn parse_completion(body: &str) -> Result<String, AnalysisError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

    response.into_content().ok_or(AnalysisError::MissingContent)
}
