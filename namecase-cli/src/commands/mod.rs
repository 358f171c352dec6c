//! CLI command implementations

use clap::Subcommand;
use namecase_core::CaseStyle;

use crate::error::CliResult;
use crate::output::OutputFormat;

pub mod convert;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert identifiers or text to a naming convention
    Convert(convert::ConvertArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available case styles
    Styles,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Convert(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Listing text, one entry per line
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self {
            ListCommands::Styles => {
                out.push_str("Available case styles:\n");
                for style in CaseStyle::ALL_NAMED {
                    let name = style.to_string();
                    out.push_str(&format!("  {:<10} {}\n", name, style.description()));
                }
                out.push_str("  delimited:<char> words joined by a custom separator\n");
            }
            ListCommands::Formats => {
                out.push_str("Available output formats:\n");
                for format in OutputFormat::ALL {
                    let name = format.to_string();
                    out.push_str(&format!("  {:<10} {}\n", name, format.description()));
                }
            }
        }
        out
    }
}
