//! List command implementation
//!
//! This module implements the `msstyle list` command, which:
//! - Loads configuration from msstyle.toml
//! - Builds the rule catalog with the `[rules]` table applied
//! - Shows every catalog entry with its category, status and message
//! - Supports both human-readable and JSONL output formats

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::cli::common::{EXIT_ERROR, EXIT_PARSE_ERROR, EXIT_SUCCESS};
use crate::config::{self, ColorOption};
use crate::error::{ConfigError, StyleError};
use crate::output::{RuleListHumanFormatter, RuleListJsonlFormatter, RuleListing};
use std::path::Path;

/// Error type specific to list command
#[derive(Debug, thiserror::Error)]
enum ListError {
    #[error(transparent)]
    Style(#[from] StyleError),

    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

impl From<ConfigError> for ListError {
    fn from(e: ConfigError) -> Self {
        ListError::Style(e.into())
    }
}

/// Run the list command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Error
/// - 3: Parse error (invalid msstyle.toml)
pub fn run_list(
    format: Option<OutputFormat>,
    config_path: Option<&Path>,
    color: Option<ColorChoice>,
) -> i32 {
    match run_list_inner(format, config_path, color) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            match e {
                ListError::Style(StyleError::Config(
                    ConfigError::Parse(_) | ConfigError::Validation(_),
                )) => EXIT_PARSE_ERROR,
                _ => EXIT_ERROR,
            }
        }
    }
}

/// Internal implementation of list command
fn run_list_inner(
    format: Option<OutputFormat>,
    config_path: Option<&Path>,
    color: Option<ColorChoice>,
) -> Result<(), ListError> {
    let config = super::common::load_config(config_path)?;
    let catalog = super::common::build_catalog(&config)?;

    let listings = build_listings(&catalog);

    let format: config::OutputFormat = format.map(Into::into).unwrap_or(config.output.format);
    let color: ColorOption = color.map(Into::into).unwrap_or(config.output.color);
    match format {
        config::OutputFormat::Human => {
            RuleListHumanFormatter::new().write_to_stdout(&listings, color)?
        }
        config::OutputFormat::Jsonl => RuleListJsonlFormatter::new().write_to_stdout(&listings),
    }

    Ok(())
}

/// Listings in catalog order
fn build_listings(catalog: &crate::rules::Catalog) -> Vec<RuleListing> {
    catalog.entries().iter().map(RuleListing::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Catalog, RuleStatus};
    use crate::types::RuleId;

    #[test]
    fn test_build_listings_keeps_catalog_order() {
        let catalog = Catalog::builtin().unwrap();
        let listings = build_listings(&catalog);

        assert_eq!(listings.len(), 26);
        assert_eq!(listings[0].rule_id, "katakana-half-width");
        assert_eq!(listings[25].rule_id, "frequent-errors-fusei");
    }

    #[test]
    fn test_build_listings_reflects_configuration() {
        let mut catalog = Catalog::builtin().unwrap();
        catalog
            .set_enabled(&RuleId::new("frequent-errors-fusei").unwrap(), false)
            .unwrap();
        let listings = build_listings(&catalog);

        let fusei = listings
            .iter()
            .find(|l| l.rule_id == "frequent-errors-fusei")
            .unwrap();
        assert_eq!(fusei.status, RuleStatus::Active);
        assert!(!fusei.enabled);
    }
}
