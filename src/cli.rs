use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::generate::{GenerateOptions, DEFAULT_OUTPUT};

const LONG_ABOUT: &str = "\
.env Generator

Generates .env files from a .properties template and a CSV file containing property values.
Placeholders in the template are written as #PLACEHOLDER# and are replaced with the matching
values from the CSV file. The CSV header row holds the property keys and the next row holds
their values.";

const GENERATE_LONG_ABOUT: &str = "\
Generate a .env file by replacing placeholders in a .properties template with values from a CSV file.

Example:
  csv2env generate -t example/template.properties -c example/client1.csv -o .env";

#[derive(Parser)]
#[command(name = "csv2env", version)]
#[command(about = "A tool to generate .env files from templates and CSV files", long_about = LONG_ABOUT)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a .env file from a template and CSV file
    #[command(long_about = GENERATE_LONG_ABOUT)]
    Generate(GenerateArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to the .properties template file
    #[arg(short, long)]
    pub template: PathBuf,

    /// Path to the CSV file containing property values
    #[arg(short, long)]
    pub csv: PathBuf,

    /// Path to the output .env file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

impl From<GenerateArgs> for GenerateOptions {
    fn from(args: GenerateArgs) -> Self {
        GenerateOptions {
            template: args.template,
            csv: args.csv,
            output: args.output,
        }
    }
}
