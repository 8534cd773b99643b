//! High-level text processing.
//!
//! [`process_text`] runs the enabled passes over one decoded buffer in a
//! fixed order: terminators, leading tabs, trailing whitespace, empty
//! lines. Generated files and buffers containing a null character are
//! returned untouched.

use std::borrow::Cow;

use crate::{
    blank::collapse_blank_lines,
    eol::ensure_crlf,
    indent::expand_leading_tabs,
    trim::trim_trailing_whitespace,
};

/// Substring that marks a file as generated.
pub const GENERATED_MARKER: &str = "This code was generated";

/// Tab width used when none is configured.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Which passes [`process_text`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each pass is toggled independently"
)]
pub struct TransformOptions {
    /// Rewrite every terminator as `\r\n`.
    pub ensure_crlf: bool,
    /// Replace leading tabs with `tab_width` spaces.
    pub tabs_to_spaces: bool,
    /// Number of spaces written for each leading tab.
    pub tab_width: usize,
    /// Strip trailing whitespace from every line.
    pub trim_trailing_whitespace: bool,
    /// Collapse consecutive empty lines.
    pub collapse_blank_lines: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            ensure_crlf: false,
            tabs_to_spaces: false,
            tab_width: DEFAULT_TAB_WIDTH,
            trim_trailing_whitespace: false,
            collapse_blank_lines: false,
        }
    }
}

impl TransformOptions {
    /// Whether no pass is enabled.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        !(self.ensure_crlf
            || self.tabs_to_spaces
            || self.trim_trailing_whitespace
            || self.collapse_blank_lines)
    }
}

/// Whether `text` carries the generated-code marker.
#[must_use]
pub fn is_generated(text: &str) -> bool {
    text.contains(GENERATED_MARKER)
}

/// Whether `text` must never be transformed.
///
/// True for generated code and for anything containing a null character,
/// which indicates binary content decoded as text.
#[must_use]
pub fn is_protected(text: &str) -> bool {
    is_generated(text) || text.contains('\0')
}

/// Apply the passes enabled in `opts` to `text`.
///
/// The second argument is the lowercase file extension of the source, if
/// known. No current pass depends on it.
///
/// The result borrows `text` when nothing was applied. Callers can compare
/// it with the input to decide whether a rewrite is needed: it is equal
/// exactly when no enabled pass changed anything.
///
/// # Examples
///
/// ```
/// use wsfix::{TransformOptions, process_text};
///
/// let opts = TransformOptions {
///     ensure_crlf: true,
///     trim_trailing_whitespace: true,
///     ..TransformOptions::default()
/// };
/// assert_eq!(process_text("a  \nb", Some("txt"), &opts), "a\r\nb");
/// ```
#[must_use]
pub fn process_text<'a>(
    text: &'a str,
    _extension: Option<&str>,
    opts: &TransformOptions,
) -> Cow<'a, str> {
    if opts.is_noop() || is_protected(text) {
        return Cow::Borrowed(text);
    }

    let mut out = Cow::Borrowed(text);
    if opts.ensure_crlf {
        out = Cow::Owned(ensure_crlf(&out));
    }
    if opts.tabs_to_spaces {
        out = Cow::Owned(expand_leading_tabs(&out, opts.tab_width));
    }
    if opts.trim_trailing_whitespace {
        out = Cow::Owned(trim_trailing_whitespace(&out));
    }
    if opts.collapse_blank_lines {
        out = Cow::Owned(collapse_blank_lines(&out));
    }
    out
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn all_passes() -> TransformOptions {
        TransformOptions {
            ensure_crlf: true,
            tabs_to_spaces: true,
            tab_width: 2,
            trim_trailing_whitespace: true,
            collapse_blank_lines: true,
        }
    }

    #[test]
    fn default_options_enable_nothing() {
        let opts = TransformOptions::default();
        assert!(opts.is_noop());
        assert_eq!(opts.tab_width, DEFAULT_TAB_WIDTH);
        assert!(matches!(process_text("a\t \n", None, &opts), Cow::Borrowed(_)));
    }

    #[rstest]
    #[case("// <auto-generated>\n// This code was generated by a tool.\n\tx  \n")]
    #[case("bin\0ary\n\tx  \n")]
    fn protected_text_is_untouched(#[case] input: &str) {
        let out = process_text(input, Some("cs"), &all_passes());
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, input);
    }

    #[test]
    fn passes_run_in_order() {
        let input = "\tif x {  \n\t\ty();\t\n}\n\n\n";
        let out = process_text(input, Some("rs"), &all_passes());
        assert_eq!(out, "  if x {\r\n    y();\r\n}\r\n\r\n");
    }

    #[test]
    fn trim_after_expansion_drops_whitespace_only_lines() {
        let opts = TransformOptions {
            tabs_to_spaces: true,
            trim_trailing_whitespace: true,
            ..TransformOptions::default()
        };
        assert_eq!(process_text("a\n\t\nb", None, &opts), "a\r\n\r\nb");
    }

    #[test]
    fn clean_crlf_text_is_unchanged() {
        let input = "fn main() {\r\n    run();\r\n}\r\n";
        assert_eq!(process_text(input, Some("rs"), &all_passes()), input);
    }
}
