//! PDF command implementation
//!
//! Concatenates the chapters of one locale into a single Markdown document,
//! headed by the locale's title, author and copyright front matter. The
//! document is the input of the PDF toolchain.

use log::info;
use std::path::{Path, PathBuf};

use crate::{
    book::{Locale, pdf_profile},
    errors::AppError,
    markdown::aggregate_chapters,
    utils::{ensure_source_dir, write_file},
};

/// Default name of the aggregated document
pub const OUTPUT_FILE: &str = "modern-cpp-tutorial.md";

/// Aggregate the chapters in `dir` into `dir/output`
///
/// The output file is truncated and fully rewritten on every run. Chapters
/// listed for `locale` but missing from `dir` are left out.
///
/// # Returns
///
/// The path of the aggregated document.
///
/// # Errors
///
/// Returns an error if `dir` does not exist or if reading a chapter or
/// writing the document fails.
pub fn build_pdf(dir: &Path, locale: Locale, output: &str) -> Result<PathBuf, AppError> {
    info!("Aggregating {} chapters in {:?}", locale, dir);
    ensure_source_dir(dir)?;

    let profile = pdf_profile(locale);
    let output_path = dir.join(output);

    let aggregation = write_file(&output_path, |out| {
        aggregate_chapters(
            dir,
            profile.chapters,
            profile.ignores,
            profile.header,
            out,
        )
    })?;

    info!(
        "Saved {} chapter(s) to {:?} ({} not found)",
        aggregation.included.len(),
        output_path,
        aggregation.skipped.len()
    );
    Ok(output_path)
}
