#![forbid(unsafe_code)]

//! msstyle: Microsoft Japanese style guide checks for technical writing
//!
//! A fixed catalog of pattern-based rules (katakana usage, long vowels,
//! spacing, numbers, tone, frequent errors) is evaluated against single
//! sentences, reporting each violation with its character span.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod rules;
pub mod types;
pub mod validator;

// Re-export error types for convenient access
pub use error::{ConfigError, RuleError, StyleError};

// Re-export core domain types for convenient access
pub use types::{Category, Locale, RuleId, Sentence, Span};

pub use engine::{EvaluationMode, Evaluator};
pub use rules::{Catalog, StyleRule, ValidationResult};
pub use validator::{ErrorSink, MsStyleValidator, SentenceValidator, ValidationError};
