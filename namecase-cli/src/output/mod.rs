//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single conversion
    fn format_conversion(&mut self, input: &str, output: &str) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One converted identifier per line
    #[default]
    Text,
    /// JSON array of input/output pairs
    Json,
}

impl OutputFormat {
    /// All formats, in listing order
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Text, OutputFormat::Json];

    /// One-line description
    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Text => "one converted identifier per line",
            OutputFormat::Json => "JSON array of {\"input\", \"output\"} objects",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
