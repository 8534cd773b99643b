//! Utility helpers shared across integration tests.

use std::{fs, path::Path};

/// Buffers that exercise every terminator shape the passes must handle.
///
/// Mixed and malformed line endings, leading and trailing terminators,
/// CR runs, tabs in and out of indentation, and non-ASCII content.
pub const TRICKY_INPUTS: &[&str] = &[
    "",
    "plain",
    "\n",
    "\r",
    "\r\n",
    "\r\r",
    "\n\r",
    "a\r\nb",
    "a\nb\n",
    "a\rb\r",
    "a\r\rb",
    "a\r\n\r\n\r\nb",
    "a\n\r\n\rb",
    "\tx\ty\n\t\tz  \r\n",
    "trail \t\r\nmore\u{a0}\n",
    "caf\u{e9} \u{2603}\r\n\u{1F600}\t\r",
    "\r\n\n\r\r\r\n",
    "  \t mixed indent\n \t\tx",
];

/// Write `contents` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, contents: impl AsRef<[u8]>) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create parent directory");
    }
    fs::write(path, contents).expect("failed to write test file");
}

/// Read `root/relative` as bytes.
pub fn read_file(root: &Path, relative: &str) -> Vec<u8> {
    fs::read(root.join(relative)).expect("failed to read test file")
}
