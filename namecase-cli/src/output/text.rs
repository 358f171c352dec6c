//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one conversion per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_conversion(&mut self, _input: &str, output: &str) -> Result<()> {
        writeln!(self.writer, "{output}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_line_per_conversion() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.format_conversion("fooBar", "foo_bar").unwrap();
        formatter.format_conversion("", "").unwrap();
        formatter.format_conversion("IOBounds", "IO_bounds").unwrap();
        formatter.finish().unwrap();

        let written = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(written, "foo_bar\n\nIO_bounds\n");
    }
}
