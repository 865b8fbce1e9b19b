//! Error types.
//!
//! Very little in the quiz can fail: rounds are generated internally and
//! stray clicks are ignored rather than reported. What remains is rejecting
//! bad configuration up front and rejecting strings that are not canonical
//! color codes.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    /// A round needs at least two options to be a choice.
    #[error("option count must be at least 2, got {0}")]
    InvalidOptionCount(usize),

    /// Not a `#RRGGBB` string with uppercase hex digits.
    #[error("invalid color code: {0:?}")]
    InvalidColor(String),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Convenience type alias for Results with QuizError
pub type Result<T> = std::result::Result<T, QuizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuizError::InvalidOptionCount(1);
        assert_eq!(err.to_string(), "option count must be at least 2, got 1");

        let err = QuizError::InvalidColor("#abc".to_string());
        assert_eq!(err.to_string(), "invalid color code: \"#abc\"");
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Table>("option_count = ").unwrap_err();
        let err: QuizError = toml_err.into();
        assert!(matches!(err, QuizError::Config(_)));
        assert!(err.to_string().starts_with("config error:"));
    }
}
