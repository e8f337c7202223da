//! `yamlify` CLI — convert JSON to YAML and back from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Convert a JSON document to YAML (stdin → stdout)
//! echo '{"name":"Alice","age":30}' | yamlify to-yaml
//!
//! # Convert from file to file
//! yamlify to-yaml -i data.json -o data.yaml
//!
//! # Convert newline-delimited JSON records; malformed records degrade to
//! # inline diagnostic comments instead of failing the batch
//! yamlify records -i events.jsonl
//!
//! # Convert YAML back to pretty-printed JSON
//! yamlify to-json -i data.yaml
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "yamlify", version, about = "JSON to YAML converter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single JSON document to YAML
    ToYaml {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Convert newline-delimited JSON records to YAML blocks
    Records {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Convert YAML back to pretty-printed JSON
    ToJson {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::ToYaml { input, output } => {
            let json = read_input(input.as_deref())?;
            let yaml = yamlify_core::emit(&json).context("Failed to convert JSON to YAML")?;
            write_output(output.as_deref(), &yaml)?;
        }
        Commands::Records { input, output } => {
            let jsonl = read_input(input.as_deref())?;
            // Never fails: malformed records become inline diagnostics
            let yaml = yamlify_core::emit_records(&jsonl);
            write_output(output.as_deref(), &yaml)?;
        }
        Commands::ToJson { input, output } => {
            let yaml = read_input(input.as_deref())?;
            let json =
                yamlify_core::yaml_to_json(&yaml).context("Failed to convert YAML to JSON")?;
            write_output(output.as_deref(), &json)?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
