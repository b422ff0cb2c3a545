#![forbid(unsafe_code)]

//! Human-readable output formatter
//!
//! One block per violation:
//!
//! ```text
//! guide.txt:3:5-7 [frequent-errors-fusei] Do not use 不正 for invalid input; ...
//!     不正
//! ```
//!
//! followed by a one-line summary.

use crate::config::ColorOption;
use crate::output::CheckReport;
use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Human-readable formatter for check reports
pub struct HumanFormatter;

impl HumanFormatter {
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Write the report to any color-capable writer
    pub fn write(&self, out: &mut dyn WriteColor, report: &CheckReport) -> io::Result<()> {
        for violation in &report.violations {
            out.set_color(ColorSpec::new().set_bold(true))?;
            write!(
                out,
                "{}:{}:{}-{}",
                violation.file, violation.error.line, violation.error.start, violation.error.end
            )?;
            out.reset()?;

            write!(out, " ")?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            write!(out, "[{}]", violation.error.rule_id)?;
            out.reset()?;
            writeln!(out, " {}", violation.error.message)?;

            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            writeln!(out, "    {}", violation.snippet)?;
            out.reset()?;
        }

        if report.passed() {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(out, "No style violations found")?;
        } else {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            write!(out, "{} style violation(s) found", report.violations.len())?;
        }
        out.reset()?;
        writeln!(
            out,
            " ({} sentences in {} files, {} rules)",
            report.sentences_checked, report.files_checked, report.rules_active
        )?;

        Ok(())
    }

    /// Write the report to stdout, honoring the color setting
    pub fn write_to_stdout(&self, report: &CheckReport, color: ColorOption) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(color_choice(color));
        self.write(&mut stdout, report)?;
        stdout.flush()
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Map the configured color option onto termcolor's choice
pub(crate) fn color_choice(color: ColorOption) -> ColorChoice {
    match color {
        ColorOption::Always => ColorChoice::Always,
        ColorOption::Never => ColorChoice::Never,
        ColorOption::Auto => {
            if io::stdout().is_terminal() {
                ColorChoice::Auto
            } else {
                ColorChoice::Never
            }
        }
    }
}
