use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::analysis::SentimentPolicy;
use crate::recorder::LogSchema;

/// Environment variable holding the Groq credential
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Prefix of environment overrides, e.g. `CALL_INSIGHTS__SERVICE__HTTP__PORT`
pub const ENV_PREFIX: &str = "CALL_INSIGHTS";

/// Whether a usable Groq credential was found at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperatingMode {
    /// Credential present: analysis calls go out to Groq
    Live,
    /// No credential: analysis is refused with a configuration error
    #[default]
    Mock,
}

impl OperatingMode {
    pub fn is_live(self) -> bool {
        matches!(self, OperatingMode::Live)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub groq: GroqSettings,
    pub analysis: AnalysisConfig,
    pub log: LogConfig,

    /// Read from `GROQ_API_KEY` only, never from config files
    #[serde(skip)]
    api_key: Option<String>,

    #[serde(skip)]
    mode: OperatingMode,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "call-insights".to_string(),
            http: HttpConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GroqSettings {
    pub api_base: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for GroqSettings {
    fn default() -> Self {
        Self {
            api_base: "https://api.groq.com/openai/v1".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            timeout_secs: 30,
        }
    }
}

impl GroqSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub sentiment_policy: SentimentPolicy,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub path: PathBuf,
    pub schema: LogSchema,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("call_analysis.csv"),
            schema: LogSchema::default(),
        }
    }
}

impl Config {
    /// Load settings from an optional config file plus `CALL_INSIGHTS__*`
    /// environment overrides, then pick up the Groq credential.
    pub fn load(path: &str) -> Result<Self> {
        let cfg = Self::load_from(path, None)?;
        Ok(cfg.with_api_key(std::env::var(API_KEY_ENV).ok()))
    }

    /// Like [`Config::load`], but reads overrides from `env` instead of the
    /// process environment when given. The credential is left unset.
    pub fn load_from(path: &str, env: Option<config::Map<String, String>>) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .source(env),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path))?;

        let cfg: Config = settings
            .try_deserialize()
            .context("Invalid configuration")?;

        Ok(cfg.with_api_key(None))
    }

    /// Attach the credential and fix the operating mode. An empty or
    /// whitespace-only key counts as absent.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        self.mode = if self.api_key.is_some() {
            OperatingMode::Live
        } else {
            OperatingMode::Mock
        };
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn mode(&self) -> OperatingMode {
        self.mode
    }
}
