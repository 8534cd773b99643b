//! File helpers for rewriting text files in place.
//!
//! [`process_file`] is the boundary between the file system and the text
//! passes: it filters binary extensions, sniffs the encoding from the
//! byte-order mark, runs [`process_text`] and writes the result back only
//! when something changed or a different output encoding was requested.

use std::{
    borrow::Cow,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};
use tracing::{debug, info, warn};

use crate::process::{TransformOptions, is_protected, process_text};

/// Extensions of files that are never opened.
pub const BINARY_EXTENSIONS: &[&str] = &[
    "exe", "dll", "pdb", "zip", "png", "jpg", "snk", "ico", "ani", "gif", "ttf", "pfx", "lex",
];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Settings for [`process_file`] that are not about the text itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Re-encode every processed file with this encoding.
    pub encoding: Option<&'static Encoding>,
    /// Report changes without writing them.
    pub dry_run: bool,
}

/// Why a file was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The extension is listed in [`BINARY_EXTENSIONS`].
    BinaryExtension,
    /// The file could not be opened or read.
    Unreadable(ErrorKind),
    /// The bytes are not valid in the detected encoding.
    Undecodable(&'static Encoding),
    /// The text is generated code or contains a null character.
    GeneratedContent,
}

/// What [`process_file`] did with a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was written back.
    Rewritten,
    /// The file would have been written back in a real run.
    WouldRewrite,
    /// Processing produced identical text and no re-encoding was requested.
    Unchanged,
    /// The file was not processed.
    Skipped(SkipReason),
}

/// Failure to write a processed file back.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// The processed text has characters the output encoding cannot hold.
    #[error("{}: text cannot be represented in {encoding}", .path.display())]
    Unencodable {
        path: PathBuf,
        encoding: &'static str,
    },
    /// Writing the file failed.
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Text decoded from a file, with what is needed to write it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    /// Decoded contents without the BOM.
    pub text: String,
    /// Encoding the contents were decoded with.
    pub encoding: &'static Encoding,
    /// Whether the file started with a byte-order mark.
    pub had_bom: bool,
}

/// Lowercase extension of `path` without the dot.
#[must_use]
pub fn extension_hint(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

/// Whether `path` has one of the [`BINARY_EXTENSIONS`].
#[must_use]
pub fn is_binary_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| BINARY_EXTENSIONS.iter().any(|b| b.eq_ignore_ascii_case(ext)))
}

fn is_utf16(encoding: &'static Encoding) -> bool {
    encoding == UTF_16LE || encoding == UTF_16BE
}

/// Whether `encoding` can be used as an output encoding.
///
/// `encoding_rs` writes UTF-8 in place of some encodings (the replacement
/// encoding among them). UTF-16 is written by [`encode`] directly.
#[must_use]
pub fn is_writable_encoding(encoding: &'static Encoding) -> bool {
    is_utf16(encoding) || encoding.output_encoding() == encoding
}

/// Decode `bytes`, picking the encoding from a byte-order mark.
///
/// Without a BOM the bytes must be valid UTF-8. Malformed input is never
/// replaced: the encoding it failed under is returned instead.
///
/// # Errors
/// Returns the detected encoding when `bytes` are malformed in it.
pub fn decode(bytes: &[u8]) -> Result<DecodedText, &'static Encoding> {
    let (encoding, bom_len) = Encoding::for_bom(bytes).unwrap_or((UTF_8, 0));
    encoding
        .decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
        .map(|text| DecodedText {
            text: text.into_owned(),
            encoding,
            had_bom: bom_len > 0,
        })
        .ok_or(encoding)
}

/// Encode `text` in `encoding`, optionally starting with a BOM.
///
/// Returns `None` if `text` has characters `encoding` cannot represent.
#[must_use]
pub fn encode(text: &str, encoding: &'static Encoding, bom: bool) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len() + UTF8_BOM.len());
    if is_utf16(encoding) {
        let little_endian = encoding == UTF_16LE;
        if bom {
            out.extend_from_slice(if little_endian { b"\xFF\xFE" } else { b"\xFE\xFF" });
        }
        for unit in text.encode_utf16() {
            let pair = if little_endian {
                unit.to_le_bytes()
            } else {
                unit.to_be_bytes()
            };
            out.extend_from_slice(&pair);
        }
        return Some(out);
    }

    if bom && encoding == UTF_8 {
        out.extend_from_slice(UTF8_BOM);
    }
    let (bytes, _, unmappable) = encoding.encode(text);
    if unmappable {
        return None;
    }
    out.extend_from_slice(&bytes);
    Some(out)
}

/// Run the text passes over the file at `path` and rewrite it if needed.
///
/// Files that cannot be read or decoded, binary extensions and generated
/// content are reported as [`FileOutcome::Skipped`]; they never fail.
/// With an encoding override, generated files are still re-encoded with
/// their text untouched. Text containing a null character is always skipped.
///
/// # Errors
/// Returns an error if the processed text cannot be encoded or written.
pub fn process_file(
    path: &Path,
    opts: &TransformOptions,
    run: &RunOptions,
) -> Result<FileOutcome, FileError> {
    if is_binary_extension(path) {
        return Ok(FileOutcome::Skipped(SkipReason::BinaryExtension));
    }

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "skipping unreadable file");
            return Ok(FileOutcome::Skipped(SkipReason::Unreadable(err.kind())));
        }
    };
    let decoded = match decode(&bytes) {
        Ok(decoded) => decoded,
        Err(encoding) => {
            warn!(path = %path.display(), encoding = encoding.name(), "skipping undecodable file");
            return Ok(FileOutcome::Skipped(SkipReason::Undecodable(encoding)));
        }
    };
    if decoded.text.contains('\0') || (run.encoding.is_none() && is_protected(&decoded.text)) {
        debug!(path = %path.display(), "skipping generated content");
        return Ok(FileOutcome::Skipped(SkipReason::GeneratedContent));
    }

    let fixed: Cow<'_, str> =
        process_text(&decoded.text, extension_hint(path).as_deref(), opts);
    if *fixed == *decoded.text && run.encoding.is_none() {
        return Ok(FileOutcome::Unchanged);
    }
    if run.dry_run {
        return Ok(FileOutcome::WouldRewrite);
    }

    let (encoding, bom) = match run.encoding {
        Some(encoding) => (encoding, is_utf16(encoding)),
        None => (decoded.encoding, decoded.had_bom),
    };
    let out = encode(&fixed, encoding, bom).ok_or_else(|| FileError::Unencodable {
        path: path.to_path_buf(),
        encoding: encoding.name(),
    })?;
    fs::write(path, out).map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), encoding = encoding.name(), "rewrote file");
    Ok(FileOutcome::Rewritten)
}
