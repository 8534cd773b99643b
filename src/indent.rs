//! Leading tab expansion.

/// Replace each leading tab on every line with `tab_width` spaces.
///
/// A tab is leading while only spaces and tabs have been seen since the
/// last `\r` or `\n`. Tabs after the first other character are kept. No
/// tab stops are computed: every leading tab becomes the same run of
/// spaces regardless of its column.
///
/// # Examples
///
/// ```
/// use wsfix::expand_leading_tabs;
///
/// assert_eq!(expand_leading_tabs("\tx\ty", 4), "    x\ty");
/// assert_eq!(expand_leading_tabs(" \tz", 2), "   z");
/// ```
#[must_use]
pub fn expand_leading_tabs(text: &str, tab_width: usize) -> String {
    let spaces = " ".repeat(tab_width);
    let mut out = String::with_capacity(text.len());
    let mut at_line_start = true;

    for ch in text.chars() {
        match ch {
            '\r' | '\n' => {
                at_line_start = true;
                out.push(ch);
            }
            '\t' if at_line_start => out.push_str(&spaces),
            '\t' | ' ' => out.push(ch),
            _ => {
                at_line_start = false;
                out.push(ch);
            }
        }
    }
    out
}
