#![forbid(unsafe_code)]

//! Host-facing validator
//!
//! The host document model hands over one sentence at a time and collects the
//! reported errors. This module translates rule results into that error model.

use crate::engine::{EvaluationMode, Evaluator};
use crate::error::RuleError;
use crate::rules::Catalog;
use crate::types::{Locale, RuleId, Sentence};
use serde::Serialize;
use std::sync::Arc;

/// A violation as reported to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// ID of the rule that was violated
    pub rule_id: RuleId,

    /// Human-readable message of the rule
    pub message: String,

    /// Line number of the sentence
    pub line: usize,

    /// First character of the offending text, within the sentence
    pub start: usize,

    /// One past the last character of the offending text
    pub end: usize,
}

/// Receiver for reported errors, owned by the host
pub trait ErrorSink {
    fn add_error(&mut self, error: ValidationError);
}

impl ErrorSink for Vec<ValidationError> {
    fn add_error(&mut self, error: ValidationError) {
        self.push(error);
    }
}

/// Contract between the host and a sentence validator
///
/// The trait is `Send + Sync` so a host can validate sentences in parallel.
pub trait SentenceValidator: Send + Sync {
    /// Locales this validator applies to
    fn supported_locales(&self) -> Vec<Locale>;

    /// Validate one sentence, reporting every violation to `sink`
    fn validate(&self, sentence: &Sentence, sink: &mut dyn ErrorSink);

    /// Whether the host should run this validator for `locale`
    fn supports(&self, locale: &Locale) -> bool {
        let language = locale.language();
        self.supported_locales()
            .iter()
            .any(|supported| supported.language() == language)
    }
}

/// Validator for the Microsoft Japanese style guide
#[derive(Debug, Clone)]
pub struct MsStyleValidator {
    catalog: Arc<Catalog>,
    mode: EvaluationMode,
}

impl MsStyleValidator {
    /// Create a validator over the built-in catalog
    ///
    /// # Errors
    ///
    /// Returns `RuleError` if the built-in catalog fails to compile.
    pub fn new() -> Result<Self, RuleError> {
        Ok(Self::with_catalog(Arc::new(Catalog::builtin()?)))
    }

    /// Create a validator over an already-built catalog
    pub fn with_catalog(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            mode: EvaluationMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: EvaluationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Validate a sentence and return the reported errors
    pub fn check(&self, sentence: &Sentence) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        self.validate(sentence, &mut errors);
        errors
    }
}

impl SentenceValidator for MsStyleValidator {
    fn supported_locales(&self) -> Vec<Locale> {
        vec![Locale::japanese()]
    }

    fn validate(&self, sentence: &Sentence, sink: &mut dyn ErrorSink) {
        let outcomes = Evaluator::new(&self.catalog)
            .with_mode(self.mode)
            .evaluate(sentence);

        for outcome in outcomes.iter().filter(|o| o.result.is_failed()) {
            let message = outcome
                .result
                .message()
                .unwrap_or_else(|| outcome.rule.message());

            for span in outcome.result.positions() {
                sink.add_error(ValidationError {
                    rule_id: outcome.rule.id().clone(),
                    message: message.to_string(),
                    line: sentence.line,
                    start: span.start,
                    end: span.end,
                });
            }
        }
    }
}
