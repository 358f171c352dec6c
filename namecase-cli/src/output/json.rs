//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs conversions as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    conversions: Vec<ConversionData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversionData {
    /// The original text
    pub input: String,
    /// The converted text
    pub output: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            conversions: Vec::new(),
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_conversion(&mut self, input: &str, output: &str) -> Result<()> {
        self.conversions.push(ConversionData {
            input: input.to_string(),
            output: output.to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.conversions)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.conversions)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
