// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

mod cli;
mod error;
mod generate;
mod output;
mod properties;
mod template;

use anyhow::Error;
use clap::Parser;

use cli::{Cli, Commands};
use generate::{generate, GenerateOptions};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => {
            let options = GenerateOptions::from(args);
            generate(&options)?;
            println!("Successfully generated {}", options.output.display());
        }
    }

    Ok(())
}
