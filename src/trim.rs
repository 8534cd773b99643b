//! Trailing whitespace removal.

use crate::lines::split_lines;

/// Separator written between lines by [`trim_trailing_whitespace`].
pub const LINE_SEPARATOR: &str = "\r\n";

/// Remove trailing whitespace from every line of `text`.
///
/// Lines come from [`split_lines`] without their terminators and are
/// joined back with [`LINE_SEPARATOR`], so every original terminator is
/// replaced by that separator. A buffer ending in a terminator keeps a
/// final separator because the segmenter reports an empty last line.
///
/// # Examples
///
/// ```
/// use wsfix::trim_trailing_whitespace;
///
/// assert_eq!(trim_trailing_whitespace("a \r\nb\t\n"), "a\r\nb\r\n");
/// ```
#[must_use]
pub fn trim_trailing_whitespace(text: &str) -> String {
    split_lines(text, false)
        .into_iter()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join(LINE_SEPARATOR)
}
