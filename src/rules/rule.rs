#![forbid(unsafe_code)]

//! The style rule type: a compiled pattern paired with a violation message

use crate::error::RuleError;
use crate::types::{Category, RuleId};
use regex::Regex;

/// A single style rule
///
/// The pattern is compiled once when the rule is created and never changes
/// afterwards, so a rule can be shared freely between threads.
#[derive(Clone)]
pub struct StyleRule {
    id: RuleId,
    category: Category,
    pattern: Regex,
    message: String,
}

impl std::fmt::Debug for StyleRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleRule")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("pattern", &self.pattern.as_str())
            .field("message", &self.message)
            .finish()
    }
}

impl StyleRule {
    /// Compile a rule
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidRegex` if `pattern` is not a valid regular
    /// expression.
    pub fn new(
        id: RuleId,
        category: Category,
        pattern: &str,
        message: impl Into<String>,
    ) -> Result<Self, RuleError> {
        let pattern = Regex::new(pattern).map_err(|e| {
            RuleError::InvalidRegex(format!(
                "Failed to compile pattern '{}' for rule '{}': {}",
                pattern, id, e
            ))
        })?;

        Ok(StyleRule {
            id,
            category,
            pattern,
            message: message.into(),
        })
    }

    pub fn id(&self) -> &RuleId {
        &self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Message reported for every violation of this rule
    pub fn message(&self) -> &str {
        &self.message
    }
}
