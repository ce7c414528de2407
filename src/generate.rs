// Copyright (c) Chris Gunn.
// Licensed under the MIT license.


use std::path::PathBuf;

use anyhow::{Context, Error};
use log::debug;

use crate::{
    output::write_output,
    properties::load_properties,
    template::{find_placeholders, load_template, substitute},
};

pub const DEFAULT_OUTPUT: &str = ".env";

#[derive(Clone, Debug)]
pub struct GenerateOptions {
    pub template: PathBuf,
    pub csv: PathBuf,
    pub output: PathBuf,
}

pub fn generate(options: &GenerateOptions) -> Result<(), Error> {
    debug!("reading template {}", options.template.display());
    let template = load_template(&options.template).context("error reading properties template")?;

    debug!("reading properties {}", options.csv.display());
    let properties = load_properties(&options.csv).context("error reading CSV file")?;

    let output = substitute(&template, &properties);
    let unresolved = find_placeholders(&output);
    if !unresolved.is_empty() {
        debug!("placeholders left unresolved: {}", unresolved.join(", "));
    }

    write_output(&options.output, &output).context("error generating .env file")?;
    Ok(())
}
