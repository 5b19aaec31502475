use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Result of scanning the template tree.
#[derive(Debug)]
pub struct ScanResult {
    /// Template files in file-name order.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Recursively collect every file under `root` whose name ends with
/// `.{extension}`.
///
/// `ignore_patterns` are globs matched against the path relative to `root`.
/// A missing or non-directory root is an error: it almost always means the
/// template path is misconfigured.
pub fn scan_templates(
    root: &Path,
    extension: &str,
    ignore_patterns: &[String],
    verbose: bool,
) -> Result<ScanResult> {
    if !root.exists() {
        bail!("Template root does not exist: {}", root.display());
    }
    if !root.is_dir() {
        bail!("Template root is not a directory: {}", root.display());
    }

    let suffix = format!(".{}", extension);
    let mut files = Vec::new();
    let mut skipped_count = 0;

    let mut glob_patterns: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        match Pattern::new(p) {
            Ok(pattern) => glob_patterns.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }

    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !entry.file_name().to_string_lossy().ends_with(&suffix) {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        if glob_patterns.iter().any(|p| p.matches_path(relative)) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    Ok(ScanResult {
        files,
        skipped_count,
    })
}
