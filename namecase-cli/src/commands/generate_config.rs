//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to pick a style and format");
        println!("2. Validate your configuration:");
        println!("   namecase validate --config {}", self.output.display());
        println!("3. Use it for conversion:");
        println!(
            "   namecase convert -i names.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template configuration content
    pub fn template() -> &'static str {
        r#"# namecase configuration

[conversion]
# Target case style: snake, kebab, dotted, camel, pascal or delimited:<char>
style = "snake"

# Join words with a custom character instead; overrides `style`.
# Letters and digits are rejected.
# separator = "~"

[output]
# Output format: text or json
format = "text"

# Pretty print JSON output
pretty_json = true
"#
    }
}
