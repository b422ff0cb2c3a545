#![forbid(unsafe_code)]

//! Evaluation of the rule catalog against a sentence
//!
//! Every enabled rule is applied independently to the sentence. Rules can be
//! fanned out over rayon's thread pool; results always come back in catalog
//! order, whichever mode is used.

use crate::error::RuleError;
use crate::rules::{Catalog, StyleRule, ValidationResult};
use crate::types::{RuleId, Sentence};
use rayon::prelude::*;

/// How the rules of a catalog are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluationMode {
    /// One rule after another on the calling thread
    Sequential,
    /// Rules fanned out across the rayon thread pool
    #[default]
    Parallel,
}

/// Result of one rule for one sentence
#[derive(Debug, Clone)]
pub struct RuleOutcome<'a> {
    pub rule: &'a StyleRule,
    pub result: ValidationResult,
}

/// Applies a catalog to sentences
///
/// The evaluator holds no state besides the borrowed catalog, so one instance
/// can evaluate any number of sentences, from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    catalog: &'a Catalog,
    mode: EvaluationMode,
}

impl<'a> Evaluator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            mode: EvaluationMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: EvaluationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> EvaluationMode {
        self.mode
    }

    /// Evaluate every enabled rule against the sentence
    ///
    /// Returns one outcome per enabled rule, passing ones included, in
    /// catalog declaration order.
    pub fn evaluate(&self, sentence: &Sentence) -> Vec<RuleOutcome<'a>> {
        let rules: Vec<&'a StyleRule> = self.catalog.active_rules().collect();
        let content = sentence.content.as_str();

        let outcomes: Vec<RuleOutcome<'a>> = match self.mode {
            EvaluationMode::Sequential => rules
                .iter()
                .map(|&rule| RuleOutcome {
                    rule,
                    result: evaluate_rule(rule, content),
                })
                .collect(),
            // Indexed collect keeps the input order
            EvaluationMode::Parallel => rules
                .par_iter()
                .map(|&rule| RuleOutcome {
                    rule,
                    result: evaluate_rule(rule, content),
                })
                .collect(),
        };

        tracing::debug!(
            line = sentence.line,
            rules = outcomes.len(),
            failed = outcomes.iter().filter(|o| o.result.is_failed()).count(),
            "evaluated sentence"
        );

        outcomes
    }

    /// Evaluate a single catalog entry, whether or not it is enabled
    ///
    /// # Errors
    ///
    /// Returns `RuleError::NotFound` for unknown IDs and
    /// `RuleError::NotImplemented` for placeholder entries.
    pub fn evaluate_by_id(
        &self,
        id: &RuleId,
        sentence: &Sentence,
    ) -> Result<ValidationResult, RuleError> {
        let entry = self
            .catalog
            .entry(id)
            .ok_or_else(|| RuleError::NotFound(id.to_string()))?;

        match entry.rule() {
            Some(rule) => Ok(evaluate_rule(rule, &sentence.content)),
            None => Err(RuleError::NotImplemented(id.to_string())),
        }
    }

    /// Long vowel counting rule
    ///
    /// Deciding whether a loan word takes a long vowel needs the source
    /// English term and a syllable count, which pattern matching cannot
    /// provide. This always reports the rule as not evaluated.
    ///
    /// # Errors
    ///
    /// Always returns `RuleError::NotImplemented`.
    pub fn validate_long_vowel(&self, _sentence: &Sentence) -> Result<ValidationResult, RuleError> {
        Err(RuleError::NotImplemented("long-vowel".to_string()))
    }
}

/// Apply one rule to the content of a sentence
///
/// A quick unanchored match decides pass/fail; only failing rules pay for the
/// exhaustive scan, which records every non-overlapping occurrence from left
/// to right as a character-offset span.
pub fn evaluate_rule(rule: &StyleRule, content: &str) -> ValidationResult {
    let pattern = rule.pattern();
    if !pattern.is_match(content) {
        return ValidationResult::new();
    }

    let mut result = ValidationResult::with_message(rule.message());
    let mut cursor = CharCursor::new(content);

    for found in pattern.find_iter(content) {
        // No built-in pattern matches the empty string
        if found.is_empty() {
            continue;
        }
        let start = cursor.advance_to(found.start());
        let end = cursor.advance_to(found.end());
        result.add_position(start, end);
    }

    tracing::trace!(
        rule = %rule.id(),
        occurrences = result.positions().len(),
        "rule matched"
    );

    result
}

/// Converts increasing byte offsets to character offsets in one pass
struct CharCursor<'a> {
    content: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharCursor<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            content,
            byte: 0,
            chars: 0,
        }
    }

    fn advance_to(&mut self, byte: usize) -> usize {
        debug_assert!(byte >= self.byte);
        self.chars += self.content[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}
