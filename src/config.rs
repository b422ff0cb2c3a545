//! Configuration file parsing and validation

pub mod style_toml;

pub use style_toml::{
    CONFIG_FILE_NAME, ColorOption, Config, EngineConfig, OutputConfig, OutputFormat, RulesConfig,
};
