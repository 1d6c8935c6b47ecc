//! Error types for the application
//!
//! This module defines all error types used throughout the application using the
//! `thiserror` crate. Each error variant provides detailed context about what went wrong.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application error types
///
/// A chapter missing from an aggregated build is not an error; it is skipped.
#[derive(Error, Debug)]
pub enum AppError {
    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// The book or locale directory to read from does not exist
    #[error("Source directory does not exist: {}", path.display())]
    MissingSourceDir { path: PathBuf },
    /// A chapter required by the website build is missing
    #[error("Missing chapter file: {}", path.display())]
    MissingChapter { path: PathBuf },
    /// A website chapter directory already exists
    #[error("Destination directory already exists: {}", path.display())]
    DestinationExists { path: PathBuf },
}

impl AppError {
    /// Create a new MissingSourceDir error
    pub fn missing_source_dir(path: &Path) -> Self {
        AppError::MissingSourceDir {
            path: path.to_path_buf(),
        }
    }
}
