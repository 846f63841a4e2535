//! Writes the option reference and the JSON schema of the configuration.
use std::{fs, path::Path};

use clap::{Parser, Subcommand};
use hyprconf::{docs, tracing_config};
use tracing::info;

#[derive(Parser)]
#[command(name = "generate-docs")]
#[command(about = "Generate reference documentation for the configuration options")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Markdown reference of every option
    Reference {
        #[arg(short, long, default_value = "docs/reference.md")]
        output: String,
    },
    /// JSON schema of the configuration object
    Schema {
        #[arg(short, long, default_value = "docs/config.schema.json")]
        output: String,
    },
    /// List the documented sections
    List,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_config::init()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Reference { output } => {
            write_output(&output, &docs::render_reference()?)?;
        }
        Commands::Schema { output } => {
            let schema = serde_json::to_string_pretty(&docs::config_schema())?;
            write_output(&output, &schema)?;
        }
        Commands::List => {
            println!("Documented sections:");
            for section in docs::get_all_sections() {
                println!("  - {} ({})", section.path, section.title);
            }
        }
    }

    Ok(())
}

fn write_output(output: &str, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new(output);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, content)?;
    info!(path = %path.display(), bytes = content.len(), "Generated documentation");
    Ok(())
}
