//! Common helper functions shared across CLI commands
//!
//! This module provides shared functionality for loading configuration,
//! reading input sentences, and building the rule catalog.

use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::{ConfigError, StyleError};
use crate::rules::Catalog;
use crate::types::Sentence;
use std::io::{self, Read};
use std::path::Path;

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Path that stands for standard input
pub const STDIN_PATH: &str = "-";

/// Load msstyle.toml configuration
///
/// An explicitly given path must exist. Without one, `msstyle.toml` in the
/// working directory is used when present and defaults otherwise.
///
/// # Errors
///
/// Returns `ConfigError::Io` if an explicit config file cannot be read.
/// Returns `ConfigError::Parse` if the file is invalid.
pub(crate) fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => Config::load(path),
        None => Config::load_or_default(CONFIG_FILE_NAME),
    }
}

/// Build the rule catalog and apply the `[rules]` table
///
/// # Errors
///
/// Returns `StyleError::Rule` if the built-in catalog fails to compile and
/// `StyleError::Config` if the configuration names unknown rules.
pub(crate) fn build_catalog(config: &Config) -> Result<Catalog, StyleError> {
    let mut catalog = Catalog::builtin()?;
    catalog.apply_config(&config.rules)?;
    Ok(catalog)
}

/// Read a text source and split it into sentences
///
/// Every non-empty line is one sentence; line numbers start at 1.
pub(crate) fn read_sentences(path: &str) -> io::Result<Vec<Sentence>> {
    let content = if path == STDIN_PATH {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };

    Ok(split_sentences(&content))
}

pub(crate) fn split_sentences(content: &str) -> Vec<Sentence> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| Sentence::new(line, index + 1))
        .collect()
}
