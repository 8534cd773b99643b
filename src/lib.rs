//! Library for normalising whitespace in text files.
//!
//! The text passes work on whole decoded buffers and never fail:
//! terminator normalisation, leading tab expansion, trailing whitespace
//! trimming and empty line collapsing, all built on one line segmentation
//! routine that tolerates mixed and malformed line endings. The [`io`] and
//! [`walk`] modules connect them to the file system.

pub mod blank;
pub mod eol;
pub mod indent;
pub mod io;
pub mod lines;
pub mod process;
pub mod trim;
pub mod walk;

pub use blank::collapse_blank_lines;
pub use eol::ensure_crlf;
pub use indent::expand_leading_tabs;
pub use io::{FileError, FileOutcome, RunOptions, SkipReason, process_file};
pub use lines::{line_lengths, split_lines};
pub use process::{
    DEFAULT_TAB_WIDTH,
    GENERATED_MARKER,
    TransformOptions,
    is_generated,
    is_protected,
    process_text,
};
pub use trim::{LINE_SEPARATOR, trim_trailing_whitespace};
pub use walk::collect_files;
