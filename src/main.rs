use std::{
    env,
    fmt,
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use clap::{ArgAction, Parser};
use encoding_rs::Encoding;
use glob::Pattern;
use rayon::prelude::*;
use tracing::{Level, debug, error};
use wsfix::{
    DEFAULT_TAB_WIDTH,
    FileError,
    FileOutcome,
    RunOptions,
    TransformOptions,
    collect_files,
    io::is_writable_encoding,
    process_file,
};

#[derive(Parser)]
#[command(
    version,
    about = "Normalise line endings, indentation and trailing whitespace in text files"
)]
struct Cli {
    /// File name pattern, e.g. "*.cs"
    #[arg(short = 'p', long = "pattern", default_value = "*", value_parser = parse_pattern)]
    pattern: Pattern,
    /// Directory to start from (defaults to the current directory)
    #[arg(short = 'd', long = "directory")]
    directory: Option<PathBuf>,
    #[command(flatten)]
    opts: FormatOpts,
    /// Re-encode every processed file, e.g. "utf-8" or "utf-16le"
    #[arg(long = "encoding", value_parser = parse_encoding)]
    encoding: Option<&'static Encoding>,
    /// List files that would change without writing them
    #[arg(long = "dry-run")]
    dry_run: bool,
    /// Log more detail to stderr; repeat for more
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

#[derive(clap::Args, Clone, Copy)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "CLI exposes four independent flags"
)]
struct FormatOpts {
    /// Rewrite every line ending as CRLF
    #[arg(long = "ensure-crlf")]
    ensure_crlf: bool,
    /// Replace leading tabs with spaces
    #[arg(long = "tabs-to-spaces")]
    tabs_to_spaces: bool,
    /// Number of spaces written for each leading tab
    #[arg(short = 's', long = "spaces", default_value_t = DEFAULT_TAB_WIDTH, value_parser = parse_tab_width)]
    spaces: usize,
    /// Remove trailing whitespace from every line
    #[arg(long = "trim-trailing-whitespace")]
    trim_trailing_whitespace: bool,
    /// Collapse consecutive empty lines
    #[arg(long = "remove-consecutive-empty-lines")]
    remove_consecutive_empty_lines: bool,
}

impl From<FormatOpts> for TransformOptions {
    fn from(opts: FormatOpts) -> Self {
        Self {
            ensure_crlf: opts.ensure_crlf,
            tabs_to_spaces: opts.tabs_to_spaces,
            tab_width: opts.spaces,
            trim_trailing_whitespace: opts.trim_trailing_whitespace,
            collapse_blank_lines: opts.remove_consecutive_empty_lines,
        }
    }
}

fn parse_pattern(s: &str) -> Result<Pattern, String> {
    Pattern::new(s).map_err(|err| err.to_string())
}

fn parse_encoding(s: &str) -> Result<&'static Encoding, String> {
    match Encoding::for_label(s.as_bytes()) {
        Some(encoding) if is_writable_encoding(encoding) => Ok(encoding),
        Some(encoding) => Err(format!("{} cannot be used for output", encoding.name())),
        None => Err(format!("unknown encoding `{s}`")),
    }
}

fn parse_tab_width(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("tab width must be at least 1".to_string()),
        Ok(width) => Ok(width),
        Err(err) => Err(err.to_string()),
    }
}

/// Tally of file outcomes for the closing report.
#[derive(Default)]
struct Summary {
    dry_run: bool,
    changed: usize,
    unchanged: usize,
    skipped: usize,
    failed: usize,
}

impl Summary {
    fn record(&mut self, path: &Path, result: Result<FileOutcome, FileError>) {
        match result {
            Ok(outcome) => {
                debug!(path = %path.display(), ?outcome, "processed");
                match outcome {
                    FileOutcome::Rewritten => self.changed += 1,
                    FileOutcome::WouldRewrite => {
                        println!("{}", path.display());
                        self.changed += 1;
                    }
                    FileOutcome::Unchanged => self.unchanged += 1,
                    FileOutcome::Skipped(_) => self.skipped += 1,
                }
            }
            Err(err) => {
                error!("{:#}", anyhow::Error::from(err));
                self.failed += 1;
            }
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.dry_run { "would rewrite" } else { "rewritten" };
        write!(
            f,
            "{verb}: {}, unchanged: {}, skipped: {}, failed: {}",
            self.changed, self.unchanged, self.skipped, self.failed
        )
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Entry point for the command-line tool that normalises whitespace in text files.
///
/// Walks the start directory, runs the enabled passes over every matching file in parallel and
/// rewrites the files that changed. Files that cannot be read or decoded are skipped and do not
/// affect the exit status.
///
/// # Returns
///
/// Returns `Ok(())` unless the start directory is unusable or at least one file could not be
/// written back.
///
/// # Examples
///
/// ```sh
/// # Convert every C# file below the current directory to CRLF
/// wsfix --pattern '*.cs' --ensure-crlf
///
/// # Expand leading tabs to two spaces and trim lines under src/
/// wsfix -d src --tabs-to-spaces -s 2 --trim-trailing-whitespace
/// ```
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let root = match cli.directory {
        Some(dir) => dir,
        None => env::current_dir().context("failed to determine the current directory")?,
    };
    if !root.is_dir() {
        bail!("{} is not a directory", root.display());
    }

    let opts = TransformOptions::from(cli.opts);
    let run = RunOptions {
        encoding: cli.encoding,
        dry_run: cli.dry_run,
    };
    let files = collect_files(&root, &cli.pattern);
    let results: Vec<_> = files
        .par_iter()
        .map(|path| process_file(path, &opts, &run))
        .collect();

    let mut summary = Summary {
        dry_run: cli.dry_run,
        ..Summary::default()
    };
    for (path, result) in files.iter().zip(results) {
        summary.record(path, result);
    }
    println!("{summary}");

    if summary.failed > 0 {
        bail!("{} file(s) could not be rewritten", summary.failed);
    }
    Ok(())
}
