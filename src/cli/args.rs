//! CLI argument parsing using clap

use crate::config;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for msstyle commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

impl From<OutputFormat> for config::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => config::OutputFormat::Human,
            OutputFormat::Jsonl => config::OutputFormat::Jsonl,
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl From<ColorChoice> for config::ColorOption {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => config::ColorOption::Auto,
            ColorChoice::Always => config::ColorOption::Always,
            ColorChoice::Never => config::ColorOption::Never,
        }
    }
}

/// msstyle CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "msstyle")]
#[command(about = "Check Japanese technical writing against the Microsoft style guide")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring (overrides msstyle.toml)
    #[arg(long, global = true)]
    pub color: Option<ColorChoice>,

    /// Configuration file (defaults to ./msstyle.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available msstyle subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check text files, one sentence per line
    Check {
        /// Files to check; `-` reads standard input
        #[arg(default_value = "-")]
        paths: Vec<String>,

        /// Output format (overrides msstyle.toml)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Locale of the input text
        #[arg(long, default_value = "ja")]
        locale: String,
    },

    /// List every rule of the catalog
    List {
        /// Output format (overrides msstyle.toml)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
}
