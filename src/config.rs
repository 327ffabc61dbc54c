use std::collections::HashMap;

use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TIMEOUT_SECS: u64 = 120;
const DEFAULT_MAX_TOKENS: u32 = 1500;
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Prefix for per-advisor model overrides, e.g. `ADVISOR_MODEL_MARKET_STRATEGIST`.
const ADVISOR_MODEL_PREFIX: &str = "ADVISOR_MODEL_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing API key: set LLM_API_KEY or OPENAI_API_KEY")]
    MissingApiKey,

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Runtime configuration, read from the environment (after `.env` is loaded).
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    /// HTTP timeout in seconds
    pub timeout: u64,
    pub max_tokens: u32,
    pub temperature: f32,
    pub host: String,
    pub port: u16,
    /// Model overrides keyed by advisor id (`financial_expert`, ...)
    pub advisor_models: HashMap<String, String>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    /// Build a config from any key lookup. `load` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("LLM_API_KEY")
            .or_else(|| non_empty("OPENAI_API_KEY"))
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = non_empty("LLM_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let mut advisor_models = HashMap::new();
        for id in crate::advisors::ADVISOR_IDS {
            let key = format!("{}{}", ADVISOR_MODEL_PREFIX, id.to_uppercase());
            if let Some(model) = non_empty(&key) {
                advisor_models.insert(id.to_string(), model);
            }
        }

        let config = Self {
            api_key,
            base_url,
            model: non_empty("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout: parse_or("LLM_TIMEOUT_SECS", non_empty("LLM_TIMEOUT_SECS"), DEFAULT_TIMEOUT_SECS)?,
            max_tokens: parse_or("LLM_MAX_TOKENS", non_empty("LLM_MAX_TOKENS"), DEFAULT_MAX_TOKENS)?,
            temperature: parse_or("LLM_TEMPERATURE", non_empty("LLM_TEMPERATURE"), DEFAULT_TEMPERATURE)?,
            host: non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or("PORT", non_empty("PORT"), DEFAULT_PORT)?,
            advisor_models,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.timeout == 0 {
            return Err(ConfigError::Invalid("timeout must be greater than zero".into()));
        }
        if self.max_tokens == 0 {
            return Err(ConfigError::Invalid("max_tokens must be greater than zero".into()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::Invalid(format!(
                "temperature must be within [0.0, 2.0], got {}",
                self.temperature
            )));
        }
        Ok(())
    }

    /// Model for an advisor: its override if one is set, else the shared default.
    pub fn model_for(&self, advisor_id: &str) -> &str {
        self.advisor_models
            .get(advisor_id)
            .map(String::as_str)
            .unwrap_or(&self.model)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}
