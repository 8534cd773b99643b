//! Line segmentation over whole-file text buffers.
//!
//! [`line_lengths`] partitions a buffer into lines under all three
//! terminator shapes (`\r\n`, `\n`, `\r`) plus the `\r\r` case, and
//! [`split_lines`] turns that partition into slices. Every other pass that
//! needs to reason about lines goes through these two functions.
//!
//! Lengths are byte counts. Terminators are ASCII, so every cut falls on a
//! `char` boundary of the source `&str`.

/// Compute the length of every line in `text`, terminators included.
///
/// The lengths partition `text` exactly: they sum to `text.len()` and
/// slicing at the running offsets yields each line with its terminator.
///
/// A carriage return only ends a line when it is followed by a line feed
/// or by a second carriage return. A lone carriage return followed by
/// anything else stays inside the line as ordinary content. The final
/// (possibly empty) line is always emitted, and a buffer ending on an
/// unresolved carriage return gets one more empty line after it. An empty
/// buffer has no lines at all.
///
/// # Examples
///
/// ```
/// use wsfix::line_lengths;
///
/// assert_eq!(line_lengths("a\r\nb"), vec![3, 1]);
/// assert_eq!(line_lengths("a\n"), vec![2, 0]);
/// assert!(line_lengths("").is_empty());
/// ```
#[must_use]
pub fn line_lengths(text: &str) -> Vec<usize> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lengths = Vec::new();
    let mut current = 0;
    let mut pending_cr = false;

    for byte in text.bytes() {
        current += 1;
        match byte {
            b'\r' if pending_cr => {
                lengths.push(current);
                current = 0;
                pending_cr = false;
            }
            b'\r' => pending_cr = true,
            b'\n' => {
                lengths.push(current);
                current = 0;
                pending_cr = false;
            }
            _ => pending_cr = false,
        }
    }

    lengths.push(current);
    if pending_cr {
        lengths.push(0);
    }
    lengths
}

/// Length of the terminator at the end of `line`, if any.
///
/// Strips `\r\n` as a unit, otherwise a single `\r` or `\n`; never both.
fn terminator_len(line: &str) -> usize {
    if line.ends_with("\r\n") {
        2
    } else if line.ends_with(['\r', '\n']) {
        1
    } else {
        0
    }
}

/// Split `text` into the lines described by [`line_lengths`].
///
/// With `keep_terminators` the slices concatenate back to `text`.
/// Without it each slice has its trailing terminator removed.
///
/// # Examples
///
/// ```
/// use wsfix::split_lines;
///
/// assert_eq!(split_lines("a\r\nb\n", false), vec!["a", "b", ""]);
/// assert_eq!(split_lines("a\r\nb\n", true), vec!["a\r\n", "b\n", ""]);
/// ```
#[must_use]
pub fn split_lines(text: &str, keep_terminators: bool) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    for len in line_lengths(text) {
        let raw = &text[start..start + len];
        start += len;
        if keep_terminators {
            lines.push(raw);
        } else {
            lines.push(&raw[..raw.len() - terminator_len(raw)]);
        }
    }
    lines
}
