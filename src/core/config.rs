//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use crate::core::errors::{GlossError, Result};
use crate::core::models::{Language, LanguagePair};

/// Environment variable prefix for overrides, e.g. `GLOSSA_TIMEOUT_MS`
pub const ENV_PREFIX: &str = "GLOSSA";

/// Environment variable naming a configuration file
pub const CONFIG_PATH_VAR: &str = "GLOSSA_CONFIG";

/// Largest accepted `max_retries`
pub const MAX_RETRIES_LIMIT: u32 = 10;

/// What to do with the gloss when the whole-sentence translation fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlossPolicy {
    /// Report the failure and skip the gloss
    #[default]
    Abort,
    /// Build the gloss anyway
    Independent,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the translation service
    pub translate_endpoint: String,
    /// Base URL of the speech service
    pub speech_endpoint: String,
    /// Per-request timeout
    pub timeout_ms: u64,
    /// Retries after the first attempt, at most [`MAX_RETRIES_LIMIT`]
    pub max_retries: u32,
    /// Backoff before the first retry; doubles after each
    pub retry_delay_ms: u64,
    /// Longest text accepted by the translation service
    pub max_chars: usize,
    /// Default source language
    pub source: Language,
    /// Default target language
    pub target: Language,
    /// Gloss behavior when the sentence translation fails
    pub gloss_policy: GlossPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            translate_endpoint: "https://translate.googleapis.com".to_string(),
            speech_endpoint: "https://translate.google.com".to_string(),
            timeout_ms: 30000,
            max_retries: 2,
            retry_delay_ms: 500,
            max_chars: 5000,
            source: Language::Tamil,
            target: Language::Japanese,
            gloss_policy: GlossPolicy::Abort,
        }
    }
}

impl AppConfig {
    /// Load defaults, then the optional file, then `GLOSSA_*` environment variables
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = path
            .map(|p| p.to_path_buf())
            .or_else(|| std::env::var_os(CONFIG_PATH_VAR).map(Into::into));

        let mut builder = config::Config::builder();
        if let Some(file) = &file {
            debug!("Loading configuration from {}", file.display());
            builder = builder.add_source(config::File::from(file.as_path()).required(true));
        }

        let config: Self = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.translate_endpoint.trim().is_empty() {
            return Err(config_error("translate_endpoint is required"));
        }

        if self.speech_endpoint.trim().is_empty() {
            return Err(config_error("speech_endpoint is required"));
        }

        if self.timeout_ms == 0 {
            return Err(config_error("timeout_ms must be greater than 0"));
        }

        if self.max_chars == 0 {
            return Err(config_error("max_chars must be greater than 0"));
        }

        if self.max_retries > MAX_RETRIES_LIMIT {
            return Err(config_error(format!(
                "max_retries must be at most {}, got {}",
                MAX_RETRIES_LIMIT, self.max_retries
            )));
        }

        if self.source == self.target {
            warn!(
                "Default source and target are both {}; translations will echo the input",
                self.source
            );
        }

        Ok(())
    }

    /// Default pair used when the caller does not pick languages
    pub fn default_pair(&self) -> LanguagePair {
        LanguagePair::new(self.source, self.target)
    }
}

fn config_error(message: impl Into<String>) -> GlossError {
    GlossError::ConfigError {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_pair(), LanguagePair::new(Language::Tamil, Language::Japanese));
        assert_eq!(config.gloss_policy, GlossPolicy::Abort);
    }

    #[test]
    fn test_config_validation_rejects_zero_timeout() {
        let config = AppConfig {
            timeout_ms: 0,
            ..Default::default()
        };

        assert!(matches!(config.validate(), Err(GlossError::ConfigError { .. })));
    }

    #[test]
    fn test_config_validation_bounds_retries() {
        let too_many = AppConfig {
            max_retries: 70,
            ..Default::default()
        };
        assert!(matches!(too_many.validate(), Err(GlossError::ConfigError { .. })));

        let at_limit = AppConfig {
            max_retries: MAX_RETRIES_LIMIT,
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_config_validation_rejects_empty_endpoint() {
        let config = AppConfig {
            translate_endpoint: " ".to_string(),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "source = \"en\"\ntarget = \"hi\"\ngloss_policy = \"independent\"\nmax_retries = 0"
        )
        .unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.source, Language::English);
        assert_eq!(config.target, Language::Hindi);
        assert_eq!(config.gloss_policy, GlossPolicy::Independent);
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.max_chars, 5000);
    }

    #[test]
    fn test_load_rejects_unknown_language() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "source = \"fr\"").unwrap();

        assert!(AppConfig::load(Some(file.path())).is_err());
    }
}
