#![forbid(unsafe_code)]

//! Core domain types for msstyle
//!
//! This module defines the fundamental types used throughout the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule groups of the style guide
///
/// The grouping only organises the catalog for humans; evaluation order is
/// the catalog declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Characters.Katakana")]
    Katakana,
    #[serde(rename = "Characters.LongVowel")]
    LongVowel,
    #[serde(rename = "Characters.EnglishLetters")]
    EnglishLetters,
    #[serde(rename = "Characters.Spaces")]
    Spaces,
    #[serde(rename = "Numbers")]
    Numbers,
    #[serde(rename = "Tone")]
    Tone,
    #[serde(rename = "FrequentErrors")]
    FrequentErrors,
}

impl Category {
    /// Dotted name of the category, e.g. `Characters.Spaces`
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Katakana => "Characters.Katakana",
            Category::LongVowel => "Characters.LongVowel",
            Category::EnglishLetters => "Characters.EnglishLetters",
            Category::Spaces => "Characters.Spaces",
            Category::Numbers => "Numbers",
            Category::Tone => "Tone",
            Category::FrequentErrors => "FrequentErrors",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated rule identifier
///
/// Rule IDs must be non-empty and contain only alphanumeric characters, hyphens, and underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuleId(String);

impl RuleId {
    /// Creates a new RuleId, validating the input
    ///
    /// Returns None if the input is empty or contains invalid characters
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            return None;
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return None;
        }
        Some(RuleId(id))
    }

    /// Returns the rule ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RuleId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RuleId::new(value).ok_or_else(|| "Invalid rule ID".to_string())
    }
}

impl From<RuleId> for String {
    fn from(rule_id: RuleId) -> Self {
        rule_id.0
    }
}

/// A half-open `[start, end)` range of character offsets within a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Number of characters covered by the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns the covered substring of `content`, or `None` if the span
    /// runs past the end of it
    pub fn slice<'a>(&self, content: &'a str) -> Option<&'a str> {
        let mut indices = content
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(content.len()));
        let start = indices.nth(self.start)?;
        let end = if self.end == self.start {
            start
        } else {
            indices.nth(self.end - self.start - 1)?
        };
        Some(&content[start..end])
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A single sentence handed over by the host document model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Text under test
    pub content: String,

    /// Line number of the sentence in its document
    pub line: usize,
}

impl Sentence {
    pub fn new(content: impl Into<String>, line: usize) -> Self {
        Sentence {
            content: content.into(),
            line,
        }
    }
}

/// A language tag such as `ja` or `ja-JP`
///
/// Only the primary language subtag takes part in comparisons made by
/// [`Locale::language`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn new(tag: impl Into<String>) -> Self {
        Locale(tag.into())
    }

    /// The Japanese locale (`ja`)
    pub fn japanese() -> Self {
        Locale::new("ja")
    }

    /// Primary language subtag, lowercased
    pub fn language(&self) -> String {
        self.0
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
