// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to read file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("CSV file must contain at least a header row and a data row")]
    MissingRows,

    #[error("number of headers ({headers}) and values ({values}) in CSV do not match")]
    LengthMismatch { headers: usize, values: usize },

    #[error("malformed CSV at line {line}: {message}")]
    Syntax { line: usize, message: String },
}
