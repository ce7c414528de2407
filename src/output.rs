// Copyright (c) Chris Gunn.
// Licensed under the MIT license.


use std::{
    fs::{DirBuilder, File, OpenOptions},
    io::{self, Write},
    path::Path,
};

use log::debug;

use crate::error::GenerateError;

#[cfg(unix)]
const DIR_MODE: u32 = 0o755;
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Writes `contents` to `path`, creating missing parent directories and
/// truncating any existing file.
pub fn write_output(path: &Path, contents: &[u8]) -> Result<(), GenerateError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        create_dir_all(dir).map_err(|source| GenerateError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let write_err = |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = open_output(path).map_err(write_err)?;
    file.write_all(contents).map_err(write_err)?;
    debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

fn create_dir_all(dir: &Path) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder.create(dir)
}

fn open_output(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    options.open(path)
}
