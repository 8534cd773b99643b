//! Consecutive empty line removal.

/// Sequence replaced by [`collapse_blank_lines`].
const BLANK_RUN: &str = "\n\r\n\r";

/// Replacement written for each [`BLANK_RUN`].
const BLANK_RUN_REPLACEMENT: &str = "\n\r";

/// Replace every `"\n\r\n\r"` in `text` with `"\n\r"`.
///
/// Matches are found left to right without overlap, in a single pass. In
/// CRLF text the pattern spans the middle of three consecutive terminators,
/// so two empty lines shrink to one; a single empty line never matches.
/// LF-only text is never affected.
///
/// # Examples
///
/// ```
/// use wsfix::collapse_blank_lines;
///
/// assert_eq!(collapse_blank_lines("a\n\r\n\rb"), "a\n\rb");
/// assert_eq!(collapse_blank_lines("a\r\n\r\n\r\nb"), "a\r\n\r\nb");
/// assert_eq!(collapse_blank_lines("a\r\n\r\nb"), "a\r\n\r\nb");
/// ```
#[must_use]
pub fn collapse_blank_lines(text: &str) -> String {
    text.replace(BLANK_RUN, BLANK_RUN_REPLACEMENT)
}
