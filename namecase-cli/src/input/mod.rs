//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

/// Where the text to convert comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Identifiers given directly on the command line
    Arguments(Vec<String>),
    /// Files matched by glob patterns
    Files(Vec<PathBuf>),
    /// Standard input
    Stdin,
}

impl InputSource {
    /// Pick a source: arguments first, then file patterns, then stdin
    pub fn select(words: &[String], patterns: &[String]) -> Result<Self> {
        if !words.is_empty() {
            return Ok(InputSource::Arguments(words.to_vec()));
        }
        if !patterns.is_empty() {
            return Ok(InputSource::Files(resolve_patterns(patterns)?));
        }
        Ok(InputSource::Stdin)
    }

    /// Short description for log messages
    pub fn display_name(&self) -> String {
        match self {
            InputSource::Arguments(words) => format!("{} argument(s)", words.len()),
            InputSource::Files(files) => format!("{} file(s)", files.len()),
            InputSource::Stdin => "stdin".to_string(),
        }
    }

    /// Read every line of the source, in order
    pub fn read_lines(&self) -> Result<Vec<String>> {
        match self {
            InputSource::Arguments(words) => Ok(words.clone()),
            InputSource::Files(files) => {
                let mut lines = Vec::new();
                for path in files {
                    log::info!("Reading {}", path.display());
                    let text = FileReader::read_text(path)?;
                    lines.extend(text.lines().map(str::to_string));
                }
                Ok(lines)
            }
            InputSource::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read stdin")?;
                Ok(text.lines().map(str::to_string).collect())
            }
        }
    }
}
