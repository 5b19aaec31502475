use std::{
    cell::OnceCell,
    path::{Component, Path, PathBuf},
};

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        KnownCodes, ParsedTemplate,
        file_scanner::scan_templates,
        parsers::{jsp::parse_template_file, properties::load_properties},
    },
    issues::ReadErrorIssue,
};

/// Templates parsed during extraction, plus the files that could not be read.
#[derive(Debug, Default)]
pub struct ParsedTemplates {
    /// One entry per readable template, in scan order.
    pub templates: Vec<ParsedTemplate>,
    pub read_errors: Vec<ReadErrorIssue>,
}

/// State for a single check run.
///
/// Built fresh per invocation so nothing leaks between runs. Construction
/// loads the properties file *before* scanning the template tree, so the
/// known-code set is complete before any template is validated.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--template-root views`)
/// 2. `.jspcheckrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    /// Resolved directory that is scanned for templates.
    pub template_root: PathBuf,

    /// Codes declared in the properties file.
    pub known_codes: KnownCodes,

    /// Template files found under `template_root`, in file-name order.
    pub files: Vec<PathBuf>,

    /// Paths under `template_root` that could not be accessed.
    pub skipped_count: usize,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    /// Initialized on first call to `parsed_templates()`.
    parsed_templates: OnceCell<ParsedTemplates>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Config file is invalid or a required path is empty
    /// - Template root doesn't exist or isn't a directory
    ///
    /// An unreadable properties file is *not* an error: a warning is printed
    /// and every referenced code will be reported as missing.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        match &config_result.path {
            Some(path) if verbose => {
                eprintln!("{} using config file {}", "note:".bold(), path.display())
            }
            None if verbose => eprintln!(
                "{} no {} found, using default configuration",
                "note:".bold(),
                CONFIG_FILE_NAME
            ),
            _ => {}
        }

        let mut config = config_result.config;

        if let Some(ref template_root) = common_args.template_root {
            config.template_root_path = template_root.to_string_lossy().to_string();
        }
        if let Some(ref message_properties) = common_args.message_properties {
            config.message_properties_path = message_properties.to_string_lossy().to_string();
        }
        config.validate()?;

        // Load first: the known-code set must be complete before any validation.
        let properties_path = resolve_path(&root_dir, &config.message_properties_path);
        let loaded = load_properties(&properties_path);
        if let Some(warning) = &loaded.warning {
            eprintln!(
                "{} Cannot load message properties {}: {}",
                "warning:".bold().yellow(),
                warning.file_path,
                warning.error
            );
            eprintln!(
                "{} every referenced message code will be reported as missing",
                "note:".bold()
            );
        }
        if verbose {
            eprintln!(
                "{} loaded {} message code(s) from {}",
                "note:".bold(),
                loaded.codes.len(),
                loaded.codes.file_path
            );
        }

        let template_root = resolve_path(&root_dir, &config.template_root_path);
        let scan_result = scan_templates(
            &template_root,
            config.extension(),
            &config.ignores,
            verbose,
        )?;

        Ok(Self {
            config,
            root_dir,
            template_root,
            known_codes: loaded.codes,
            files: scan_result.files,
            skipped_count: scan_result.skipped_count,
            verbose,
            parsed_templates: OnceCell::new(),
        })
    }

    /// Parse all template files (lazy initialization).
    ///
    /// Files are read and parsed in parallel; results keep scan order.
    /// Unreadable files are collected as read errors and skipped.
    pub fn parsed_templates(&self) -> &ParsedTemplates {
        self.parsed_templates.get_or_init(|| {
            let root_dir = &self.root_dir;
            let results: Vec<_> = self
                .files
                .par_iter()
                .map(|path| {
                    let display_path = display_path(root_dir, path);
                    let result = parse_template_file(path, &display_path);
                    (display_path, result)
                })
                .collect();

            let mut parsed = ParsedTemplates::default();
            for (file_path, result) in results {
                match result {
                    Ok(template) => parsed.templates.push(template),
                    Err(e) => {
                        if self.verbose {
                            eprintln!(
                                "{} Skipping {}: {:#}",
                                "warning:".bold().yellow(),
                                file_path,
                                e
                            );
                        }
                        parsed.read_errors.push(ReadErrorIssue {
                            file_path,
                            error: format!("{:#}", e),
                        });
                    }
                }
            }
            parsed
        })
    }

    /// Path shown to the user: relative to the project root when possible.
    pub fn display_path(&self, path: &Path) -> String {
        display_path(&self.root_dir, path)
    }
}

fn display_path(root_dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root_dir).unwrap_or(path);
    relative.to_string_lossy().replace('\\', "/")
}

/// Resolve a configured path against the project root.
///
/// Absolute paths are kept. When the root is the current directory the path
/// is used as-is so reported paths stay short.
fn resolve_path(root_dir: &Path, configured: &str) -> PathBuf {
    let p = Path::new(configured);
    if p.is_absolute() {
        return p.to_path_buf();
    }

    let is_cur_dir = root_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        root_dir.join(rel)
    }
}
