#![forbid(unsafe_code)]

//! Catalog listing formatters
//!
//! This module provides formatters for displaying the rule catalog from the
//! `msstyle list` command. It supports both human-readable and JSONL output
//! formats.

use crate::config::ColorOption;
use crate::output::human::color_choice;
use crate::rules::{CatalogEntry, RuleStatus};
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, NoColor, StandardStream, WriteColor};

/// Listing information for a single catalog entry
#[derive(Debug, Clone)]
pub struct RuleListing {
    pub rule_id: String,
    pub category: String,
    pub status: RuleStatus,
    pub enabled: bool,
    pub message: String,
}

impl From<&CatalogEntry> for RuleListing {
    fn from(entry: &CatalogEntry) -> Self {
        RuleListing {
            rule_id: entry.id().to_string(),
            category: entry.category().to_string(),
            status: entry.status(),
            enabled: entry.is_enabled(),
            message: entry.message().to_string(),
        }
    }
}

/// Human-readable formatter for the catalog
pub struct RuleListHumanFormatter;

impl RuleListHumanFormatter {
    /// Create a new human formatter
    pub fn new() -> Self {
        RuleListHumanFormatter
    }

    /// Write catalog entries grouped under their category headings
    pub fn write(&self, out: &mut dyn WriteColor, listings: &[RuleListing]) -> io::Result<()> {
        let enabled = listings.iter().filter(|l| l.enabled).count();
        writeln!(out, "Rules ({} enabled, {} total):", enabled, listings.len())?;

        let mut current_category: Option<&str> = None;
        for listing in listings {
            if current_category != Some(listing.category.as_str()) {
                writeln!(out)?;
                out.set_color(ColorSpec::new().set_bold(true))?;
                write!(out, "{}", listing.category)?;
                out.reset()?;
                writeln!(out)?;
                current_category = Some(listing.category.as_str());
            }

            let (icon, color) = if listing.enabled {
                ("✓", Color::Green)
            } else {
                ("✗", Color::Red)
            };
            let note = match (listing.status, listing.enabled) {
                (RuleStatus::Unimplemented, _) => " (not implemented)",
                (RuleStatus::Disabled, true) => " (enabled by configuration)",
                (RuleStatus::Disabled, false) => " (disabled)",
                (RuleStatus::Active, false) => " (disabled by configuration)",
                (RuleStatus::Active, true) => "",
            };

            write!(out, "  ")?;
            out.set_color(ColorSpec::new().set_fg(Some(color)))?;
            write!(out, "{}", icon)?;
            out.reset()?;
            writeln!(out, " {}{}", listing.rule_id, note)?;
            writeln!(out, "      {}", listing.message)?;
        }

        Ok(())
    }

    /// Format catalog entries as plain text
    pub fn format(&self, listings: &[RuleListing]) -> String {
        let mut out = NoColor::new(Vec::new());
        // Writing to memory cannot fail
        let _ = self.write(&mut out, listings);
        String::from_utf8_lossy(&out.into_inner()).into_owned()
    }

    /// Write the listing to stdout, honoring the color setting
    pub fn write_to_stdout(&self, listings: &[RuleListing], color: ColorOption) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(color_choice(color));
        self.write(&mut stdout, listings)?;
        stdout.flush()
    }
}

impl Default for RuleListHumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// JSONL output structure for a catalog entry
#[derive(Debug, Serialize)]
struct JsonlRuleListing<'a> {
    rule_id: &'a str,
    category: &'a str,
    status: &'static str,
    enabled: bool,
    message: &'a str,
}

/// JSONL formatter for the catalog
pub struct RuleListJsonlFormatter;

impl RuleListJsonlFormatter {
    /// Create a new JSONL formatter
    pub fn new() -> Self {
        RuleListJsonlFormatter
    }

    /// Format catalog entries as JSONL, one object per entry
    pub fn format(&self, listings: &[RuleListing]) -> String {
        let mut output = String::new();

        for listing in listings {
            let record = JsonlRuleListing {
                rule_id: &listing.rule_id,
                category: &listing.category,
                status: listing.status.as_str(),
                enabled: listing.enabled,
                message: &listing.message,
            };

            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, listings: &[RuleListing]) {
        print!("{}", self.format(listings));
    }
}

impl Default for RuleListJsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Catalog;

    fn create_test_listing(rule_id: &str, status: RuleStatus, enabled: bool) -> RuleListing {
        RuleListing {
            rule_id: rule_id.to_string(),
            category: "Tone".to_string(),
            status,
            enabled,
            message: format!("{} message", rule_id),
        }
    }

    #[test]
    fn test_human_formatter_empty() {
        let output = RuleListHumanFormatter::new().format(&[]);
        assert!(output.contains("Rules (0 enabled, 0 total)"));
    }

    #[test]
    fn test_human_formatter_statuses() {
        let listings = vec![
            create_test_listing("active-rule", RuleStatus::Active, true),
            create_test_listing("switched-off", RuleStatus::Active, false),
            create_test_listing("opted-in", RuleStatus::Disabled, true),
            create_test_listing("dormant", RuleStatus::Disabled, false),
            create_test_listing("placeholder", RuleStatus::Unimplemented, false),
        ];
        let output = RuleListHumanFormatter::new().format(&listings);

        assert!(output.contains("Rules (2 enabled, 5 total)"));
        assert!(output.contains("  ✓ active-rule\n"));
        assert!(output.contains("  ✗ switched-off (disabled by configuration)"));
        assert!(output.contains("  ✓ opted-in (enabled by configuration)"));
        assert!(output.contains("  ✗ dormant (disabled)"));
        assert!(output.contains("  ✗ placeholder (not implemented)"));
        assert!(output.contains("      active-rule message"));
    }

    #[test]
    fn test_human_formatter_groups_by_category() {
        let catalog = Catalog::builtin().unwrap();
        let listings: Vec<RuleListing> = catalog.entries().iter().map(RuleListing::from).collect();
        let output = RuleListHumanFormatter::new().format(&listings);

        assert_eq!(output.matches("\nCharacters.Spaces\n").count(), 1);
        assert_eq!(output.matches("\nNumbers\n").count(), 1);
        assert!(output.contains("Rules (24 enabled, 26 total)"));
        assert!(output.contains("long-vowel (not implemented)"));
        assert!(output.contains("numbers-chinese-numerals (disabled)"));
    }

    #[test]
    fn test_jsonl_formatter_empty() {
        let output = RuleListJsonlFormatter::new().format(&[]);
        assert_eq!(output, "");
    }

    #[test]
    fn test_jsonl_formatter_records() {
        let listings = vec![
            create_test_listing("active-rule", RuleStatus::Active, true),
            create_test_listing("placeholder", RuleStatus::Unimplemented, false),
        ];
        let output = RuleListJsonlFormatter::new().format(&listings);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["rule_id"], "active-rule");
        assert_eq!(first["category"], "Tone");
        assert_eq!(first["status"], "active");
        assert_eq!(first["enabled"], true);
        assert_eq!(first["message"], "active-rule message");

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["status"], "unimplemented");
        assert_eq!(second["enabled"], false);
    }

    #[test]
    fn test_listing_from_entry() {
        let catalog = Catalog::builtin().unwrap();
        let entry = &catalog.entries()[0];
        let listing = RuleListing::from(entry);
        assert_eq!(listing.rule_id, "katakana-half-width");
        assert_eq!(listing.category, "Characters.Katakana");
        assert_eq!(listing.status, RuleStatus::Active);
        assert!(listing.enabled);
    }

    #[test]
    fn test_human_write_with_color() {
        let listings = vec![
            create_test_listing("active-rule", RuleStatus::Active, true),
            create_test_listing("dormant", RuleStatus::Disabled, false),
        ];

        let mut colored = termcolor::Buffer::ansi();
        RuleListHumanFormatter::new()
            .write(&mut colored, &listings)
            .unwrap();
        let colored = String::from_utf8(colored.into_inner()).unwrap();
        assert!(colored.contains("\x1b["));
        assert!(colored.contains("active-rule"));

        let mut plain = termcolor::Buffer::no_color();
        RuleListHumanFormatter::new()
            .write(&mut plain, &listings)
            .unwrap();
        let plain = String::from_utf8(plain.into_inner()).unwrap();
        assert!(!plain.contains("\x1b["));
        assert_eq!(plain, RuleListHumanFormatter::new().format(&listings));
    }
}
