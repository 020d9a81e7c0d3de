//! Assistant configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum similarity a token must strictly exceed to be corrected.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Characters of a query that may appear in logs.
pub const DEFAULT_LOG_PREVIEW_CHARS: usize = 50;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Similarity threshold must be within 0.0..=1.0, got {0}")]
    InvalidThreshold(f64),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level configuration for [`crate::MedicalAssistant`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssistantConfig {
    pub normalizer: NormalizerConfig,
    /// How many characters of a query are included in log lines
    pub log_preview_chars: usize,
}

/// Text normalizer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Fuzzy correction threshold (exclusive)
    pub similarity_threshold: f64,
    /// Filler words dropped before matching
    pub filler_words: Vec<String>,
    /// Also drop fillers that span several tokens (e.g. "you know").
    /// Off by default: plain token filtering leaves them in place.
    pub strip_multi_word_fillers: bool,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            normalizer: NormalizerConfig::default(),
            log_preview_chars: DEFAULT_LOG_PREVIEW_CHARS,
        }
    }
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            filler_words: ["um", "uh", "like", "you know", "well", "so", "actually"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
            strip_multi_word_fillers: false,
        }
    }
}

impl AssistantConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: AssistantConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let threshold = self.normalizer.similarity_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::InvalidThreshold(threshold));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AssistantConfig::default();
        assert_eq!(config.normalizer.similarity_threshold, 0.6);
        assert_eq!(config.log_preview_chars, 50);
        assert!(!config.normalizer.strip_multi_word_fillers);
        assert!(config.normalizer.filler_words.contains(&"you know".to_string()));
        assert_eq!(config.normalizer.filler_words.len(), 7);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = AssistantConfig::from_json("{}").unwrap();
        assert_eq!(config, AssistantConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = AssistantConfig::from_json(
            r#"{"normalizer": {"strip_multi_word_fillers": true}, "log_preview_chars": 20}"#,
        )
        .unwrap();

        assert!(config.normalizer.strip_multi_word_fillers);
        assert_eq!(config.normalizer.similarity_threshold, 0.6);
        assert_eq!(config.log_preview_chars, 20);
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        let result = AssistantConfig::from_json(r#"{"normalizer": {"similarity_threshold": 1.5}}"#);
        assert!(matches!(result, Err(ConfigError::InvalidThreshold(t)) if t == 1.5));
    }

    #[test]
    fn test_rejects_nan_threshold() {
        let mut config = AssistantConfig::default();
        config.normalizer.similarity_threshold = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            AssistantConfig::from_json("[1, 2"),
            Err(ConfigError::Json(_))
        ));
    }
}
