//! Chapter aggregation
//!
//! Streams the filtered chapters of a book directory into a single writer.

use log::debug;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use super::filter::{filter_lines, split_lines};
use crate::errors::AppError;

/// Outcome of one aggregation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Aggregation {
    /// Chapters written, in order
    pub included: Vec<PathBuf>,
    /// Listed chapters that were not found
    pub skipped: Vec<PathBuf>,
}

/// Concatenate filtered chapters into `out`
///
/// This function:
/// 1. Writes `header` if one is given
/// 2. For every chapter present in `dir`, writes a blank line followed by the
///    chapter's lines minus those containing an ignore keyword
/// 3. Silently skips chapters that are not regular files
///
/// # Arguments
///
/// * `dir` - Directory holding the chapter files
/// * `chapters` - Chapter filenames, in output order
/// * `ignores` - Keywords marking a line for removal
/// * `header` - Optional front matter
/// * `out` - Destination stream
///
/// # Errors
///
/// Returns an error if a present chapter cannot be read as UTF-8 or if
/// writing to `out` fails.
pub fn aggregate_chapters<W: Write>(
    dir: &Path,
    chapters: &[&str],
    ignores: &[&str],
    header: Option<&str>,
    out: &mut W,
) -> Result<Aggregation, AppError> {
    let mut aggregation = Aggregation::default();

    if let Some(header) = header {
        out.write_all(header.as_bytes())?;
    }

    for chapter in chapters {
        let path = dir.join(chapter);

        if !path.is_file() {
            debug!("Chapter not found, skipping: {:?}", path);
            aggregation.skipped.push(path);
            continue;
        }

        let content = fs::read_to_string(&path)?;
        out.write_all(b"\n")?;

        let total = split_lines(&content).count();
        let mut kept = 0usize;
        for line in filter_lines(split_lines(&content), ignores) {
            out.write_all(line.as_bytes())?;
            kept += 1;
        }
        debug!("Wrote {:?}, dropped {} line(s)", path, total - kept);

        aggregation.included.push(path);
    }

    Ok(aggregation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn aggregate_to_string(
        dir: &Path,
        chapters: &[&str],
        ignores: &[&str],
        header: Option<&str>,
    ) -> (String, Aggregation) {
        let mut out = Vec::new();
        let aggregation = aggregate_chapters(dir, chapters, ignores, header, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), aggregation)
    }

    #[test]
    fn test_aggregate_single_chapter() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("01-intro.md"), "# Intro\nTOC\nSome content\n").unwrap();

        let (output, aggregation) =
            aggregate_to_string(dir.path(), &["01-intro.md"], &["TOC"], None);

        assert_eq!(output, "\n# Intro\nSome content\n");
        assert_eq!(aggregation.included, vec![dir.path().join("01-intro.md")]);
        assert!(aggregation.skipped.is_empty());
    }

    #[test]
    fn test_aggregate_skips_missing_chapters() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "alpha\n").unwrap();
        fs::write(dir.path().join("c.md"), "gamma\n").unwrap();

        let (output, aggregation) =
            aggregate_to_string(dir.path(), &["a.md", "b.md", "c.md"], &["TOC"], None);

        assert_eq!(output, "\nalpha\n\ngamma\n");
        assert_eq!(aggregation.skipped, vec![dir.path().join("b.md")]);
        assert_eq!(aggregation.included.len(), 2);
    }

    #[test]
    fn test_aggregate_writes_header_first() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "body\nlicense text\n").unwrap();

        let (output, _) = aggregate_to_string(
            dir.path(),
            &["a.md"],
            &["license"],
            Some("---\ntitle: \"T\"\n---\n"),
        );

        assert_eq!(output, "---\ntitle: \"T\"\n---\n\nbody\n");
    }

    #[test]
    fn test_aggregate_header_only_when_nothing_found() {
        let dir = tempdir().unwrap();

        let (output, aggregation) =
            aggregate_to_string(dir.path(), &["missing.md"], &[], Some("HEAD\n"));

        assert_eq!(output, "HEAD\n");
        assert!(aggregation.included.is_empty());
    }

    #[test]
    fn test_aggregate_ignores_directories_named_like_chapters() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("a.md")).unwrap();

        let (output, aggregation) = aggregate_to_string(dir.path(), &["a.md"], &[], None);

        assert!(output.is_empty());
        assert_eq!(aggregation.skipped.len(), 1);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "x\r\nTOC\r\ny").unwrap();
        fs::write(dir.path().join("b.md"), "z\n").unwrap();

        let first = aggregate_to_string(dir.path(), &["a.md", "b.md"], &["TOC"], Some("H\n"));
        let second = aggregate_to_string(dir.path(), &["a.md", "b.md"], &["TOC"], Some("H\n"));

        assert_eq!(first, second);
        assert_eq!(first.0, "H\n\nx\r\ny\nz\n");
    }
}
