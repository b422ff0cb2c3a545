//! Check command implementation
//!
//! This module implements the `msstyle check` command, which:
//! - Loads configuration from msstyle.toml
//! - Builds the rule catalog
//! - Reads sentences from the given files or stdin
//! - Validates every sentence
//! - Formats output (human or JSONL)
//! - Returns appropriate exit code

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::cli::common::{EXIT_ERROR, EXIT_PARSE_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS};
use crate::config::{self, ColorOption};
use crate::error::{ConfigError, StyleError};
use crate::output::{CheckReport, HumanFormatter, JsonlFormatter, ReportedViolation};
use crate::types::{Locale, Sentence, Span};
use crate::validator::{MsStyleValidator, SentenceValidator};
use rayon::prelude::*;
use std::path::Path;
use std::sync::Arc;

/// Error type specific to check command
#[derive(Debug, thiserror::Error)]
pub(crate) enum CheckError {
    #[error(transparent)]
    Style(#[from] StyleError),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

impl From<ConfigError> for CheckError {
    fn from(e: ConfigError) -> Self {
        CheckError::Style(e.into())
    }
}

/// Options of a check run
#[derive(Debug, Clone)]
pub struct CheckOptions<'a> {
    pub paths: &'a [String],
    pub format: Option<OutputFormat>,
    pub locale: &'a str,
    pub config: Option<&'a Path>,
    pub color: Option<ColorChoice>,
}

/// Run the check command
///
/// # Returns
///
/// Exit code:
/// - 0: Success (no violations)
/// - 1: One or more style violations
/// - 2: Error (I/O or rule error)
/// - 3: Parse error (invalid msstyle.toml)
pub fn run_check(options: &CheckOptions<'_>) -> i32 {
    match run_check_inner(options) {
        Ok(true) => EXIT_SUCCESS,
        Ok(false) => EXIT_VIOLATIONS,
        Err(e) => {
            eprintln!("Error: {}", e);
            match e {
                CheckError::Style(StyleError::Config(
                    ConfigError::Parse(_) | ConfigError::Validation(_),
                )) => EXIT_PARSE_ERROR,
                _ => EXIT_ERROR,
            }
        }
    }
}

/// Internal implementation of check command
fn run_check_inner(options: &CheckOptions<'_>) -> Result<bool, CheckError> {
    // 1. Load msstyle.toml config
    let config = super::common::load_config(options.config)?;

    // 2. Build catalog and validator
    let catalog = super::common::build_catalog(&config)?;
    let validator =
        MsStyleValidator::with_catalog(Arc::new(catalog)).with_mode(config.engine.mode());

    let format: config::OutputFormat = options
        .format
        .map(Into::into)
        .unwrap_or(config.output.format);
    let color: ColorOption = options.color.map(Into::into).unwrap_or(config.output.color);

    // 3. Validate every sentence of every input
    let locale = Locale::new(options.locale);
    let report = if validator.supports(&locale) {
        check_paths(&validator, options.paths)?
    } else {
        tracing::warn!(locale = %locale, "locale not supported by the Microsoft Japanese style rules, skipping");
        CheckReport {
            files_checked: options.paths.len(),
            ..CheckReport::default()
        }
    };

    // 4. Format and print output
    match format {
        config::OutputFormat::Human => HumanFormatter::new().write_to_stdout(&report, color)?,
        config::OutputFormat::Jsonl => JsonlFormatter::new().write_to_stdout(&report),
    }

    Ok(report.passed())
}

/// Validate all sentences of the given inputs, in input order
fn check_paths(validator: &MsStyleValidator, paths: &[String]) -> Result<CheckReport, CheckError> {
    let mut report = CheckReport {
        rules_active: validator.catalog().active_len(),
        ..CheckReport::default()
    };

    for path in paths {
        let sentences =
            super::common::read_sentences(path).map_err(|source| CheckError::Read {
                path: path.clone(),
                source,
            })?;

        let violations: Vec<Vec<ReportedViolation>> = sentences
            .par_iter()
            .map(|sentence| check_sentence(validator, path, sentence))
            .collect();

        tracing::debug!(path = %path, sentences = sentences.len(), "checked input");

        report.files_checked += 1;
        report.sentences_checked += sentences.len();
        report.violations.extend(violations.into_iter().flatten());
    }

    Ok(report)
}

fn check_sentence(
    validator: &MsStyleValidator,
    path: &str,
    sentence: &Sentence,
) -> Vec<ReportedViolation> {
    validator
        .check(sentence)
        .into_iter()
        .map(|error| {
            let snippet = Span::new(error.start, error.end)
                .slice(&sentence.content)
                .unwrap_or_default()
                .to_string();
            ReportedViolation {
                file: path.to_string(),
                error,
                snippet,
            }
        })
        .collect()
}
