//! Engine configuration loaded from the environment.

use std::fmt::Display;
use std::str::FromStr;

use crate::infrastructure::chat_completions::{
    DEFAULT_LLM_BASE_URL, DEFAULT_LLM_MODEL, DEFAULT_LLM_TIMEOUT_SECS,
};
use crate::use_cases::spawn::DEFAULT_TEMPERATURE;

/// Runtime configuration for the engine binary.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub llm_base_url: String,
    pub llm_model: String,
    pub llm_api_key: Option<String>,
    pub llm_referer: Option<String>,
    pub llm_timeout_secs: u64,
    pub llm_temperature: f32,
    /// Retries around the transport. 0 keeps one outbound call per spawn.
    pub llm_max_retries: u32,
    pub server_host: String,
    pub server_port: u16,
    pub cors_allowed_origins: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            llm_base_url: DEFAULT_LLM_BASE_URL.to_string(),
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            llm_api_key: None,
            llm_referer: None,
            llm_timeout_secs: DEFAULT_LLM_TIMEOUT_SECS,
            llm_temperature: DEFAULT_TEMPERATURE,
            llm_max_retries: 0,
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            cors_allowed_origins: None,
        }
    }
}

impl EngineConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// Blank values count as unset. Numeric values that fail to parse fall
    /// back to their defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |keys: &[&str]| -> Option<String> {
            keys.iter()
                .filter_map(|key| lookup(key))
                .map(|value| value.trim().to_string())
                .find(|value| !value.is_empty())
        };
        let defaults = Self::default();

        Self {
            llm_base_url: get(&["LLM_BASE_URL", "OLLAMA_BASE_URL"])
                .unwrap_or(defaults.llm_base_url),
            llm_model: get(&["LLM_MODEL", "OLLAMA_MODEL"]).unwrap_or(defaults.llm_model),
            llm_api_key: get(&["LLM_API_KEY"]),
            llm_referer: get(&["LLM_REFERER"]),
            llm_timeout_secs: parse_or(
                "LLM_TIMEOUT_SECS",
                get(&["LLM_TIMEOUT_SECS"]),
                defaults.llm_timeout_secs,
            ),
            llm_temperature: parse_or(
                "LLM_TEMPERATURE",
                get(&["LLM_TEMPERATURE"]),
                defaults.llm_temperature,
            ),
            llm_max_retries: parse_or(
                "LLM_MAX_RETRIES",
                get(&["LLM_MAX_RETRIES"]),
                defaults.llm_max_retries,
            ),
            server_host: get(&["SERVER_HOST"]).unwrap_or(defaults.server_host),
            server_port: parse_or(
                "SERVER_PORT",
                get(&["SERVER_PORT", "PORT"]),
                defaults.server_port,
            ),
            cors_allowed_origins: get(&["CORS_ALLOWED_ORIGINS"]),
        }
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Display + Copy,
    T::Err: Display,
{
    match raw {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            tracing::warn!(
                key = key,
                value = %raw,
                error = %e,
                default = %default,
                "Invalid configuration value, using default"
            );
            default
        }),
    }
}
