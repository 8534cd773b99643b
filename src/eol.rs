//! Line terminator normalisation.

/// Rewrite every line terminator in `text` as `\r\n`.
///
/// Existing `\r\n` pairs are kept, a bare `\n` gains a preceding `\r` and a
/// bare `\r` gains a following `\n`. A bare `\r` is only recognised once the
/// next character is seen, so a buffer ending in `\r` keeps that final
/// `\r` as is. Applying the function twice gives the same result as
/// applying it once.
///
/// # Examples
///
/// ```
/// use wsfix::ensure_crlf;
///
/// assert_eq!(ensure_crlf("a\nb\rc"), "a\r\nb\r\nc");
/// assert_eq!(ensure_crlf("a\r\nb"), "a\r\nb");
/// ```
#[must_use]
pub fn ensure_crlf(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 16);
    let mut previous: Option<char> = None;

    for ch in text.chars() {
        match (previous, ch) {
            (Some('\r'), '\n') => {}
            (_, '\n') => out.push('\r'),
            (Some('\r'), _) => out.push('\n'),
            _ => {}
        }
        out.push(ch);
        previous = Some(ch);
    }
    out
}
