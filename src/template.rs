// Copyright (c) Chris Gunn.
// Licensed under the MIT license.


use std::{fs, path::Path, str};

use crate::{error::GenerateError, properties::PropertyMapping};

pub const PLACEHOLDER_DELIMITER: u8 = b'#';

// Templates are raw bytes so that non-UTF-8 files (e.g. ISO-8859-1
// .properties) pass through untouched.
pub fn load_template(path: &Path) -> Result<Vec<u8>, GenerateError> {
    fs::read(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn placeholder(name: &str) -> String {
    let delimiter = PLACEHOLDER_DELIMITER as char;
    format!("{delimiter}{name}{delimiter}")
}

/// Replaces every `#NAME#` in `template` with the value bound to `NAME`.
///
/// The template is scanned once from left to right and substituted values
/// are never scanned again, so the result does not depend on the order of
/// the properties. Placeholders with no binding are left as they are.
pub fn substitute(template: &[u8], properties: &PropertyMapping) -> Vec<u8> {
    if properties.is_empty() {
        return template.to_vec();
    }

    let mut result = Vec::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = find_delimiter(rest) {
        result.extend_from_slice(&rest[..start]);
        let after = &rest[start + 1..];
        let value = find_delimiter(after).and_then(|end| {
            let name = str::from_utf8(&after[..end]).ok()?;
            properties.get(name).map(|value| (value, end))
        });
        match value {
            Some((value, end)) => {
                result.extend_from_slice(value.as_bytes());
                rest = &after[end + 1..];
            }
            None => {
                // The next delimiter may open a placeholder of its own.
                result.push(PLACEHOLDER_DELIMITER);
                rest = after;
            }
        }
    }
    result.extend_from_slice(rest);
    result
}

/// Lists the names of the `#NAME#` tokens found in `text`, in order of
/// appearance.
pub fn find_placeholders(text: &[u8]) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = text;
    while let Some(start) = find_delimiter(rest) {
        let after = &rest[start + 1..];
        let Some(end) = find_delimiter(after) else {
            break;
        };
        match str::from_utf8(&after[..end]) {
            Ok(name) if !name.is_empty() && name.chars().all(is_placeholder_char) => {
                names.push(name);
                rest = &after[end + 1..];
            }
            _ => rest = after,
        }
    }
    names
}

fn find_delimiter(bytes: &[u8]) -> Option<usize> {
    bytes.iter().position(|b| *b == PLACEHOLDER_DELIMITER)
}

fn is_placeholder_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.')
}
