//! Session configuration.
//!
//! Hosts build a `QuizConfig` in code or load one from TOML:
//!
//! ```
//! use color_quiz::core::QuizConfig;
//!
//! let config = QuizConfig::from_toml_str("option_count = 6\nseed = 99").unwrap();
//! assert_eq!(config.option_count, 6);
//! assert_eq!(config.seed, Some(99));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};

/// Options per round when nothing else is configured.
pub const DEFAULT_OPTION_COUNT: usize = 4;

/// Smallest option count that still offers a choice.
pub const MIN_OPTION_COUNT: usize = 2;

/// Configuration for one quiz session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Swatches shown per round. Must be at least 2.
    pub option_count: usize,

    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            option_count: DEFAULT_OPTION_COUNT,
            seed: None,
        }
    }
}

impl QuizConfig {
    /// Create a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of options per round.
    #[must_use]
    pub fn with_option_count(mut self, count: usize) -> Self {
        self.option_count = count;
        self
    }

    /// Fix the RNG seed for a reproducible session.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject configurations that cannot produce a real choice.
    pub fn validate(&self) -> Result<()> {
        if self.option_count < MIN_OPTION_COUNT {
            return Err(QuizError::InvalidOptionCount(self.option_count));
        }
        Ok(())
    }

    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QuizConfig::default();
        assert_eq!(config.option_count, 4);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = QuizConfig::new().with_option_count(6).with_seed(123);

        assert_eq!(config.option_count, 6);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_validate_rejects_degenerate_counts() {
        for count in [0, 1] {
            let err = QuizConfig::new().with_option_count(count).validate().unwrap_err();
            assert!(matches!(err, QuizError::InvalidOptionCount(c) if c == count));
        }
        assert!(QuizConfig::new().with_option_count(2).validate().is_ok());
    }

    #[test]
    fn test_from_toml_defaults() {
        let config = QuizConfig::from_toml_str("").unwrap();
        assert_eq!(config, QuizConfig::default());

        let config = QuizConfig::from_toml_str("seed = 5").unwrap();
        assert_eq!(config.option_count, DEFAULT_OPTION_COUNT);
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn test_from_toml_errors() {
        assert!(matches!(
            QuizConfig::from_toml_str("option_count = 1"),
            Err(QuizError::InvalidOptionCount(1))
        ));
        assert!(matches!(
            QuizConfig::from_toml_str("option_count = \"four\""),
            Err(QuizError::Config(_))
        ));
    }
}
