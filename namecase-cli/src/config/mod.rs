//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use namecase_core::{CaseStyle, Separator};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Conversion configuration
    #[serde(default)]
    pub conversion: ConversionConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Conversion-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ConversionConfig {
    /// Target case style
    pub style: CaseStyle,

    /// Custom separator; takes precedence over `style`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<Separator>,
}

impl ConversionConfig {
    /// Effective style once the separator override is applied
    pub fn effective_style(&self) -> CaseStyle {
        match self.separator {
            Some(sep) => CaseStyle::Delimited(sep),
            None => self.style,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.message().to_string()).into())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        log::debug!("Loaded configuration from {}: {:?}", path.display(), config);

        Ok(config)
    }

    /// Render this configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
