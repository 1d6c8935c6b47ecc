//! Keyword line filter

/// Split text into lines, keeping each line's terminator
///
/// Concatenating the returned lines gives back `content` byte for byte.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split_inclusive('\n')
}

/// Drop every line that contains one of the ignore keywords
///
/// Matching is a plain, case-sensitive substring test. Surviving lines are
/// yielded unchanged and in their original order.
///
/// # Arguments
///
/// * `lines` - The lines to filter
/// * `ignores` - Keywords marking a line for removal
pub fn filter_lines<'k, I, S>(lines: I, ignores: &'k [&'k str]) -> impl Iterator<Item = S> + 'k
where
    I: IntoIterator<Item = S>,
    I::IntoIter: 'k,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter(move |line| !ignores.iter().any(|keyword| line.as_ref().contains(keyword)))
}
