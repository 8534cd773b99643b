//! Recursive file discovery.

use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// Whether `entry` is a dotted file or directory below the walk root.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}

/// Collect every file under `root` whose name matches `pattern`.
///
/// Dotted directories such as `.git` are not entered and dotted files are
/// ignored. Symlinks are not followed. Entries that cannot be read are
/// logged and left out. Entries are sorted by name within each directory.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// use glob::Pattern;
/// use wsfix::collect_files;
///
/// let pattern = Pattern::new("*.rs").unwrap();
/// for file in collect_files(Path::new("src"), &pattern) {
///     println!("{}", file.display());
/// }
/// ```
#[must_use]
pub fn collect_files(root: &Path, pattern: &Pattern) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| pattern.matches(name))
        })
        .map(DirEntry::into_path)
        .collect()
}
