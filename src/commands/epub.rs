//! E-book command implementation
//!
//! Writes a filtered `<chapter>.markdown` copy next to every chapter of the
//! book directory. The e-book toolchain picks these files up instead of the
//! raw chapters, which still carry navigation and license lines.

use log::info;
use std::path::{Path, PathBuf};

use crate::{
    book::{self, Profile},
    errors::AppError,
    markdown::aggregate_chapters,
    utils::{ensure_source_dir, write_file},
};

/// Build the e-book sources in `dir`
///
/// Chapters missing from `dir` are skipped and produce no output file.
/// Existing output files are truncated and rewritten.
///
/// # Returns
///
/// The paths of the files written, in chapter order.
///
/// # Errors
///
/// Returns an error if `dir` does not exist or if reading a chapter or
/// writing its output fails.
pub fn build_epub(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    build_with_profile(dir, &book::EPUB)
}

fn build_with_profile(dir: &Path, profile: &Profile) -> Result<Vec<PathBuf>, AppError> {
    info!("Building e-book sources in {:?}", dir);
    ensure_source_dir(dir)?;

    let mut written = Vec::new();

    for chapter in profile.chapters {
        if !dir.join(chapter).is_file() {
            continue;
        }

        let output_path = dir.join(format!("{}.markdown", chapter));
        write_file(&output_path, |out| {
            aggregate_chapters(dir, &[*chapter], profile.ignores, profile.header, out)
        })?;

        info!("Saved {:?}", output_path);
        written.push(output_path);
    }

    info!("Wrote {} e-book chapter(s)", written.len());
    Ok(written)
}
