//! Convert command implementation

use crate::config::CliConfig;
use crate::input::InputSource;
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::Args;
use namecase_core::{CaseStyle, Separator};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Identifiers to convert (default: read --input files or stdin)
    #[arg(value_name = "TEXT")]
    pub words: Vec<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Target case style (snake, kebab, dotted, camel, pascal, delimited:<char>)
    #[arg(short, long, value_name = "STYLE")]
    pub style: Option<CaseStyle>,

    /// Join words with this character instead of a named style
    #[arg(long, value_name = "CHAR", conflicts_with = "style")]
    pub separator: Option<Separator>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "NAMECASE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting conversion");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let style = self.resolve_style(&config);
        let format = self.format.unwrap_or(config.output.format);

        let source = InputSource::select(&self.words, &self.input)?;
        log::info!("Converting {} to {}", source.display_name(), style);
        let lines = source.read_lines()?;

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout().lock()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
        };

        let converted = convert_lines(&lines, style, formatter.as_mut())?;
        formatter.finish()?;
        log::info!("Converted {converted} line(s)");

        Ok(())
    }

    /// Pick the target style: flags first, then the config file
    pub fn resolve_style(&self, config: &CliConfig) -> CaseStyle {
        if let Some(sep) = self.separator {
            return CaseStyle::Delimited(sep);
        }
        self.style.unwrap_or_else(|| config.conversion.effective_style())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let env = env_logger::Env::default().default_filter_or(log_level);
        if let Err(e) = env_logger::Builder::from_env(env).try_init() {
            log::debug!("Keeping existing logger: {e}");
        }
    }
}

/// Convert each line and hand it to `formatter`, returning the line count
pub fn convert_lines(
    lines: &[String],
    style: CaseStyle,
    formatter: &mut dyn OutputFormatter,
) -> Result<usize> {
    for line in lines {
        let converted = style.apply(line);
        log::trace!("{line:?} -> {converted:?}");
        formatter.format_conversion(line, &converted)?;
    }
    Ok(lines.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConversionConfig;

    fn args() -> ConvertArgs {
        ConvertArgs {
            words: vec!["fooBar".to_string()],
            input: Vec::new(),
            output: None,
            style: None,
            separator: None,
            format: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_convert_args_debug() {
        let debug_str = format!("{:?}", args());
        assert!(debug_str.contains("ConvertArgs"));
        assert!(debug_str.contains("fooBar"));
    }

    #[test]
    fn test_style_defaults_to_config() {
        let config = CliConfig {
            conversion: ConversionConfig {
                style: CaseStyle::Pascal,
                separator: None,
            },
            ..Default::default()
        };
        assert_eq!(args().resolve_style(&config), CaseStyle::Pascal);
        assert_eq!(args().resolve_style(&CliConfig::default()), CaseStyle::Snake);
    }

    #[test]
    fn test_flags_override_config() {
        let config = CliConfig {
            conversion: ConversionConfig {
                style: CaseStyle::Pascal,
                separator: Some(Separator::HYPHEN),
            },
            ..Default::default()
        };

        let mut with_style = args();
        with_style.style = Some(CaseStyle::Dotted);
        assert_eq!(with_style.resolve_style(&config), CaseStyle::Dotted);

        let mut with_separator = args();
        with_separator.separator = Some(Separator::new('/').unwrap());
        assert_eq!(
            with_separator.resolve_style(&config),
            CaseStyle::Delimited(Separator::new('/').unwrap())
        );
    }

    #[test]
    fn test_init_logging_is_repeatable() {
        let mut verbose = args();
        verbose.quiet = false;
        verbose.verbose = 2;
        verbose.init_logging();
        verbose.init_logging();
        assert!(verbose.execute().is_ok());
    }

    #[test]
    fn test_convert_lines() {
        let lines = vec![
            "rawHTTPBody".to_string(),
            String::new(),
            "Anything goes!".to_string(),
        ];
        let mut formatter = TextFormatter::new(Vec::new());

        let count = convert_lines(&lines, CaseStyle::Kebab, &mut formatter).unwrap();
        assert_eq!(count, 3);

        let written = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(written, "raw-HTTP-body\n\nanything-goes\n");
    }

    #[test]
    fn test_execute_writes_output_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let output = temp_dir.path().join("out.txt");

        let mut convert = args();
        convert.words = vec!["IOBounds".to_string(), "TCPConn".to_string()];
        convert.output = Some(output.clone());
        convert.execute().unwrap();

        let written = std::fs::read_to_string(output).unwrap();
        assert_eq!(written, "IO_bounds\nTCP_conn\n");
    }
}
