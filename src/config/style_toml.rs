//! Parsing and validation for msstyle.toml configuration files

use crate::engine::EvaluationMode;
use crate::error::ConfigError;
use crate::types::RuleId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "msstyle.toml";

/// Rule overrides from the `[rules]` table, keyed by rule ID
pub type RulesConfig = HashMap<RuleId, bool>;

/// Main configuration struct for msstyle.toml
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// File metadata
    #[serde(default)]
    pub msstyle: StyleMeta,

    /// Rules explicitly enabled (`true`) or disabled (`false`)
    #[serde(default)]
    pub rules: RulesConfig,

    /// Evaluation settings
    #[serde(default)]
    pub engine: EngineConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading configuration");
        Self::parse(&content)
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Rule IDs are checked against the catalog when the configuration is
    /// applied to it.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.msstyle.version != "1" {
            return Err(ConfigError::Validation(format!(
                "Unsupported configuration version '{}'. Expected '1'",
                self.msstyle.version
            )));
        }

        Ok(())
    }
}

/// `[msstyle]` metadata section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleMeta {
    /// Configuration version (must be "1")
    pub version: String,
}

impl Default for StyleMeta {
    fn default() -> Self {
        Self {
            version: "1".to_string(),
        }
    }
}

/// `[engine]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Evaluate the rules of a sentence in parallel
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_parallel() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
        }
    }
}

impl EngineConfig {
    pub fn mode(&self) -> EvaluationMode {
        if self.parallel {
            EvaluationMode::Parallel
        } else {
            EvaluationMode::Sequential
        }
    }
}

/// Output configuration section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Color output setting
    #[serde(default)]
    pub color: ColorOption,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON Lines format
    Jsonl,
}

/// Color output options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    /// Auto-detect based on terminal capabilities
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}
