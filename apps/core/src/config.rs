//! Companion configuration.
//!
//! Loaded once from the environment (and an optional `.env` file) and passed
//! explicitly to whatever needs it. The API key lives here rather than in any
//! process-wide storage.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;
use validator::Validate;

use crate::error::AppError;
use crate::models::PreferredLanguage;
use crate::telemetry::LogFormat;

pub const DEFAULT_API_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

#[derive(Clone, Validate)]
pub struct CompanionConfig {
    /// Key for the remote completion service. `None` selects the rule-based responder.
    pub api_key: Option<String>,
    /// Base URL of an OpenAI-compatible API, without the `/chat/completions` suffix.
    #[validate(length(min = 1))]
    pub api_base_url: String,
    #[validate(length(min = 1))]
    pub model: String,
    #[validate(range(min = 0.0, max = 2.0))]
    pub temperature: f32,
    #[validate(range(min = 1, max = 8192))]
    pub max_tokens: u32,
    #[validate(range(min = 1, max = 300))]
    pub timeout_secs: u64,
    pub language: PreferredLanguage,
    /// Pause before classification, to pace the "thinking" indicator.
    pub think_delay_ms: u64,
    /// Pause while the thinking trace is on screen, before the reply.
    pub reveal_delay_ms: u64,
    pub log_format: LogFormat,
    /// `.env` file that was read, if any
    pub env_file: Option<PathBuf>,
}

impl fmt::Debug for CompanionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompanionConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base_url", &self.api_base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .field("language", &self.language)
            .field("think_delay_ms", &self.think_delay_ms)
            .field("reveal_delay_ms", &self.reveal_delay_ms)
            .field("log_format", &self.log_format)
            .field("env_file", &self.env_file)
            .finish()
    }
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 512,
            timeout_secs: 30,
            language: PreferredLanguage::English,
            think_delay_ms: 800,
            reveal_delay_ms: 1200,
            log_format: LogFormat::Pretty,
            env_file: None,
        }
    }
}

/// Read and parse an optional variable, falling back to `default` when unset or blank.
fn env_or<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{} has an invalid value '{}': {}", key, raw, e))),
        _ => Ok(default),
    }
}

impl CompanionConfig {
    /// Load from `MOYO_*` variables, after reading `.env` if present.
    ///
    /// Nothing is logged here; call [`CompanionConfig::log_startup`] once
    /// tracing is installed.
    pub fn from_env() -> Result<Self, AppError> {
        let env_file = dotenv::dotenv().ok();
        let mut config = Self::from_process_env()?;
        config.env_file = env_file;
        Ok(config)
    }

    /// Load from the current process environment only.
    pub fn from_process_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let api_key = env::var("MOYO_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let config = Self {
            api_key,
            api_base_url: env_or("MOYO_API_BASE_URL", defaults.api_base_url)?,
            model: env_or("MOYO_MODEL", defaults.model)?,
            temperature: env_or("MOYO_TEMPERATURE", defaults.temperature)?,
            max_tokens: env_or("MOYO_MAX_TOKENS", defaults.max_tokens)?,
            timeout_secs: env_or("MOYO_TIMEOUT_SECS", defaults.timeout_secs)?,
            language: env_or("MOYO_LANGUAGE", defaults.language)?,
            think_delay_ms: env_or("MOYO_THINK_DELAY_MS", defaults.think_delay_ms)?,
            reveal_delay_ms: env_or("MOYO_REVEAL_DELAY_MS", defaults.reveal_delay_ms)?,
            log_format: env_or("MOYO_LOG_FORMAT", defaults.log_format)?,
            env_file: None,
        };

        config.check()?;
        Ok(config)
    }

    /// Validate field ranges and the base URL.
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()?;
        let url = Url::parse(&self.api_base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "MOYO_API_BASE_URL must be http(s), got '{}'",
                url.scheme()
            )));
        }
        Ok(())
    }

    /// Report how the configuration was loaded
    pub fn log_startup(&self) {
        if let Some(path) = &self.env_file {
            info!(path = %path.display(), "Loaded environment from .env");
        }
        info!(config = ?self, "Configuration loaded");
        if self.api_key.is_none() {
            warn!("MOYO_API_KEY not set; using the offline rule-based companion");
        }
    }

    /// Whether a remote completion service is configured
    pub fn has_remote(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Endpoint for chat completions
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base_url.trim_end_matches('/'))
    }
}
