//! Relative link rewriting for the website tree
//!
//! Every chapter becomes a directory holding an `index` page, so a link to a
//! sibling chapter `./foo.md` must point at `../foo/index.html` instead.

use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

static CHAPTER_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\./([^()\s]*?)\.md").expect("valid regex"));

/// Rewrite `(./<name>.md` link targets to `(../<name>/index.html`
///
/// Whatever follows the `.md` (closing paren, `#anchor`) is left in place.
/// Lines without a chapter link are returned borrowed.
pub fn rewrite_links(line: &str) -> Cow<'_, str> {
    CHAPTER_LINK.replace_all(line, "(../${1}/index.html")
}
