// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

mod csv_parser;


use std::{fs, path::Path};

use hashlink::LinkedHashMap;
use log::debug;

use crate::error::{FormatError, GenerateError};

use csv_parser::CsvParser;

/// Property names mapped to their values, taken from the header row and the
/// first data row of the property source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyMapping {
    values: LinkedHashMap<String, String>,
}

impl PropertyMapping {
    pub fn new() -> PropertyMapping {
        PropertyMapping::default()
    }

    /// Binds `name` to `value`, replacing any earlier binding.
    pub fn insert(&mut self, name: String, value: String) {
        self.values.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl FromIterator<(String, String)> for PropertyMapping {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut mapping = PropertyMapping::new();
        for (name, value) in iter {
            mapping.insert(name, value);
        }
        mapping
    }
}

pub fn load_properties(path: &Path) -> Result<PropertyMapping, GenerateError> {
    let text = fs::read_to_string(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let properties = parse_properties_str(&text)?;
    debug!("loaded {} properties from {}", properties.len(), path.display());
    Ok(properties)
}

pub fn parse_properties_str(text: &str) -> Result<PropertyMapping, FormatError> {
    let parser = CsvParser::new();
    let records = parser.parse(text)?;

    let (headers, values) = match &records[..] {
        [headers, values, rest @ ..] => {
            if !rest.is_empty() {
                debug!("ignoring {} extra CSV data row(s)", rest.len());
            }
            (headers, values)
        }
        _ => return Err(FormatError::MissingRows),
    };

    if headers.len() != values.len() {
        return Err(FormatError::LengthMismatch {
            headers: headers.len(),
            values: values.len(),
        });
    }

    let properties = headers.iter().cloned().zip(values.iter().cloned()).collect();
    Ok(properties)
}
