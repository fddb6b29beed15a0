use std::fmt;
use std::fs::{remove_file, rename, File};
use std::io::{Error, ErrorKind};
use std::io::prelude::*;
use std::path::{Path, PathBuf};

fn temporary_path(file_path: &Path) -> Result<PathBuf, Error> {
    let file_name = file_path.file_name()
        .ok_or(Error::new(ErrorKind::InvalidInput, "path has no file name"))?;
    let mut temp_name = std::ffi::OsString::from(".");
    temp_name.push(file_name);
    temp_name.push(".tmp");
    Ok(file_path.with_file_name(temp_name))
}

fn write_and_sync(data: &[u8], file_path: &Path) -> Result<(), Error> {
    let mut file = File::create(file_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    Ok(())
}

/// Writes data to a sibling temporary file and renames it into place.
/// The target path either keeps its previous content or receives all of `data`.
pub fn write_file_atomic(data: &[u8], file_path: &Path) -> Result<(), Error> {
    let temp_path = temporary_path(file_path)?;
    let result = write_and_sync(data, &temp_path)
        .and_then(|_| rename(&temp_path, file_path));
    if result.is_err() {
        // Best effort
        remove_file(&temp_path).ok();
    };
    result
}

#[derive(Debug)]
pub struct FileSize(usize);

impl FileSize {
    pub fn new(size: usize) -> Self {
        Self(size)
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (value, unit) = match self.0 {
            size if size > 10_000_000 => (size / 1_000_000, "MB"),
            size if size > 10_000 => (size / 1_000, "kB"),
            size => (size, "B"),
        };
        write!(formatter, "{}{}", value, unit)
    }
}
