//! Error types for msstyle
//!
//! This module defines the error types used throughout msstyle, following
//! a hierarchical structure with specific error variants for different
//! error categories.

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML syntax or shape
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration is well-formed but semantically invalid
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Rule-related errors
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Invalid rule definition
    #[error("Invalid rule definition: {0}")]
    InvalidDefinition(String),

    /// Rule not found
    #[error("Rule not found: {0}")]
    NotFound(String),

    /// Invalid regex pattern
    #[error("Invalid regex pattern: {0}")]
    InvalidRegex(String),

    /// Rule exists in the catalog but has no detection logic
    #[error("Rule is not implemented: {0}")]
    NotImplemented(String),
}

/// Top-level error type for msstyle
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_error_display() {
        let err = RuleError::NotImplemented("long-vowel".to_string());
        assert_eq!(err.to_string(), "Rule is not implemented: long-vowel");
    }

    #[test]
    fn test_style_error_from_rule_error() {
        let err: StyleError = RuleError::InvalidRegex("[unclosed".to_string()).into();
        assert!(matches!(err, StyleError::Rule(RuleError::InvalidRegex(_))));
        assert!(err.to_string().starts_with("Rule error:"));
    }

    #[test]
    fn test_config_error_from_toml() {
        let parse_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: ConfigError = parse_err.into();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_style_error_wraps_config_and_rule_errors_only() {
        let errors: Vec<StyleError> = vec![
            ConfigError::Validation("bad".to_string()).into(),
            RuleError::NotFound("x".to_string()).into(),
        ];
        for err in errors {
            // Exhaustive: a new variant must be constructed somewhere first
            match err {
                StyleError::Config(e) => assert!(matches!(e, ConfigError::Validation(_))),
                StyleError::Rule(e) => assert!(matches!(e, RuleError::NotFound(_))),
            }
        }
    }
}
