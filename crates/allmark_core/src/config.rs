//! Projection and logging configuration.
//!
//! # Responsibility
//! - Parse the JSON settings used to wire a projector and logging.
//! - Validate settings before any component is built from them.
//!
//! # Invariants
//! - `base_url` is never blank after validation.
//! - `log_level` is one of `trace|debug|info|warn|error`.

use crate::logging::default_log_level;
use crate::mapper::format::DEFAULT_LANGUAGE;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Settings for projecting a repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectorConfig {
    /// Prefix for absolute item and tag routes.
    pub base_url: String,
    pub log_level: String,
    /// Language code used for items without a usable language.
    pub fallback_language: String,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self {
            base_url: "/".to_string(),
            log_level: default_log_level().to_string(),
            fallback_language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl ProjectorConfig {
    /// Parses and validates a JSON document. Missing keys use defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks field-level invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::BlankBaseUrl);
        }
        parse_log_level(&self.log_level)?;
        let language = self.fallback_language.trim();
        if language.len() != 2 || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidFallbackLanguage(
                self.fallback_language.clone(),
            ));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Input is not valid JSON for the config shape.
    Parse(serde_json::Error),
    /// `base_url` is blank.
    BlankBaseUrl,
    /// Log level is not supported.
    UnsupportedLogLevel(String),
    /// Fallback language is not a two-letter code.
    InvalidFallbackLanguage(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::BlankBaseUrl => write!(f, "base_url must not be blank"),
            Self::UnsupportedLogLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::InvalidFallbackLanguage(value) => {
                write!(f, "fallback_language must be a two-letter code, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

/// Normalizes a log level name.
pub fn parse_log_level(level: &str) -> Result<&'static str, ConfigError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(ConfigError::UnsupportedLogLevel(other.to_string())),
    }
}
