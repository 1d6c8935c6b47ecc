//! Utility functions for file system operations
//!
//! This module provides helper functions shared by the build commands.

use log::error;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::errors::AppError;

/// Fail unless `dir` is an existing directory
///
/// # Errors
///
/// Returns [`AppError::MissingSourceDir`] if the directory does not exist.
pub fn ensure_source_dir(dir: &Path) -> Result<(), AppError> {
    if !dir.is_dir() {
        error!("Source directory does not exist: {:?}", dir);
        return Err(AppError::missing_source_dir(dir));
    }
    Ok(())
}

/// Chapter filename without its `.md` extension
///
/// Names without the extension are returned as-is.
pub fn chapter_stem(chapter: &str) -> &str {
    chapter.strip_suffix(".md").unwrap_or(chapter)
}

/// Truncate `path` and run `write` against a buffered handle to it
///
/// The buffer is flushed before returning so that write errors are reported.
pub fn write_file<T, F>(path: &Path, write: F) -> Result<T, AppError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<T, AppError>,
{
    let mut out = BufWriter::new(File::create(path)?);
    let value = write(&mut out)?;
    out.flush()?;
    Ok(value)
}
