//! Website command implementation
//!
//! Every chapter of every locale becomes its own directory on the site, with
//! the filtered chapter stored as `index.md` inside it. Links between chapters
//! are rewritten to follow that layout.

use log::{error, info};
use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use crate::{
    book::{self, Locale, Profile},
    errors::AppError,
    markdown::{filter_lines, rewrite_links, split_lines},
    utils::{chapter_stem, ensure_source_dir, write_file},
};

/// Name of the page written into each chapter directory
pub const INDEX_FILE: &str = "index.md";

/// Build the website content tree for every locale
///
/// For each locale, chapters are read from `book_dir/<locale>` and written
/// to `site_dir/<locale>/<chapter>/index.md`.
///
/// # Returns
///
/// The paths of all pages written.
///
/// # Errors
///
/// Returns an error if:
/// - A locale source directory does not exist
/// - A chapter file is missing
/// - A chapter directory already exists in the destination
/// - Reading or writing a file fails
///
/// Pages written before the failure are left in place.
pub fn build_website(book_dir: &Path, site_dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    info!("Building website content from {:?} into {:?}", book_dir, site_dir);

    let mut written = Vec::new();
    for locale in book::WEBSITE_LOCALES {
        written.extend(build_locale(book_dir, site_dir, *locale, &book::WEBSITE)?);
    }

    info!("Wrote {} page(s)", written.len());
    Ok(written)
}

/// Build the content tree of a single locale
fn build_locale(
    book_dir: &Path,
    site_dir: &Path,
    locale: Locale,
    profile: &Profile,
) -> Result<Vec<PathBuf>, AppError> {
    let source_dir = book_dir.join(locale.dir_name());
    let destination_dir = site_dir.join(locale.dir_name());
    ensure_source_dir(&source_dir)?;
    fs::create_dir_all(&destination_dir)?;

    let mut written = Vec::with_capacity(profile.chapters.len());

    for chapter in profile.chapters {
        let source_path = source_dir.join(chapter);
        if !source_path.is_file() {
            error!("Missing chapter file: {:?}", source_path);
            return Err(AppError::MissingChapter { path: source_path });
        }

        let chapter_dir = destination_dir.join(chapter_stem(chapter));
        create_chapter_dir(&chapter_dir)?;
        info!("Created {:?}", chapter_dir);

        let page_path = chapter_dir.join(INDEX_FILE);
        let content = fs::read_to_string(&source_path)?;
        write_file(&page_path, |out| {
            for line in filter_lines(split_lines(&content), profile.ignores) {
                out.write_all(rewrite_links(line).as_bytes())?;
            }
            Ok(())
        })?;
        info!("Saved {:?}", page_path);

        written.push(page_path);
    }

    Ok(written)
}

/// Create a chapter directory that must not exist yet
fn create_chapter_dir(path: &Path) -> Result<(), AppError> {
    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::AlreadyExists => {
            error!("Destination directory already exists: {:?}", path);
            Err(AppError::DestinationExists {
                path: path.to_path_buf(),
            })
        }
        Err(err) => Err(err.into()),
    }
}
