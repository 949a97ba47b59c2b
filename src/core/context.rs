use std::{
    cell::OnceCell,
    collections::{BTreeMap, BTreeSet},
    path::{Component, Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow, bail};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        AllLocaleMessages, FileType, Occurrence,
        file_scanner::{ScanOptions, scan_files},
        key_usage::{KeyUsageRules, scan_for_used_keys},
        parsers::json::{ScanMessagesResult, scan_locale_files},
        scan::{ScanRules, scan_for_unlocalized_text},
    },
    issues::ParseErrorIssue,
};

/// Unlocalized-text occurrences per source file. Files without findings are omitted.
pub type AllOccurrences = BTreeMap<String, Vec<Occurrence>>;

/// Analysis context for one project.
///
/// Configuration, the file list and locale files are loaded up front (the
/// two scans run in parallel). Everything derived from file contents is
/// computed on first access and cached:
///
/// 1. `sources()`: file contents, read in parallel
/// 2. `occurrences()`: unlocalized text per file
/// 3. `used_keys()`: translation keys referenced anywhere in the sources
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--locale-root`)
/// 2. `.i18nscanrc.json` config file
/// 3. Built-in defaults
pub struct ScanContext {
    pub config: Config,

    /// Project root directory (where the config file was searched from).
    pub root_dir: PathBuf,

    /// Resolved locale directory.
    pub locale_dir: PathBuf,

    /// Source files to analyze.
    pub files: BTreeSet<String>,

    pub verbose: bool,

    scan_rules: ScanRules,
    key_rules: KeyUsageRules,

    /// Locale scan outcome. A missing locale directory only fails the
    /// commands that need messages.
    locale_scan: Result<ScanMessagesResult>,

    sources: OnceCell<BTreeMap<String, String>>,
    source_read_errors: OnceCell<Vec<ParseErrorIssue>>,
    occurrences: OnceCell<AllOccurrences>,
    used_keys: OnceCell<BTreeSet<String>>,
}

impl ScanContext {
    /// Create a context for the project at `--source-root`.
    ///
    /// `target` narrows the analyzed sources to one file or directory;
    /// relative targets are resolved against the project root.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid, one of its patterns does
    /// not compile, or `target` does not exist.
    pub fn new(common_args: &CommonArgs, target: Option<&Path>) -> Result<Self> {
        let verbose = common_args.verbose;

        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let root_str = root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?
            .to_string();

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!(
                "{} No .i18nscanrc.json found, using default configuration",
                "note:".bold().cyan()
            );
        }

        let mut config = config_result.config;
        if let Some(ref locale_root) = common_args.locale_root {
            config.locale_root = locale_root.to_string_lossy().to_string();
        }

        let scan_rules = ScanRules::from_config(&config)?;
        let key_rules = KeyUsageRules::new(&config)?;
        let locale_dir = resolve_relative(&root_dir, &config.locale_root);

        let target = match target {
            Some(t) => {
                let resolved = if t.is_absolute() {
                    t.to_path_buf()
                } else {
                    resolve_relative(&root_dir, &t.to_string_lossy())
                };
                if !resolved.exists() {
                    bail!("Path '{}' does not exist", resolved.display());
                }
                Some(resolved)
            }
            None => None,
        };

        let (files, locale_scan) = rayon::join(
            || collect_files(&config, &root_str, target.as_deref(), verbose),
            || scan_locale_files(&locale_dir),
        );

        Ok(Self {
            config,
            root_dir,
            locale_dir,
            files,
            verbose,
            scan_rules,
            key_rules,
            locale_scan,
            sources: OnceCell::new(),
            source_read_errors: OnceCell::new(),
            occurrences: OnceCell::new(),
            used_keys: OnceCell::new(),
        })
    }

    pub fn scan_rules(&self) -> &ScanRules {
        &self.scan_rules
    }

    /// Contents of every readable source file (lazy initialization).
    ///
    /// Files that cannot be read are reported through `source_read_errors()`.
    pub fn sources(&self) -> &BTreeMap<String, String> {
        self.sources.get_or_init(|| {
            let read_results: Vec<_> = self
                .files
                .par_iter()
                .map(|file_path| (file_path.clone(), std::fs::read_to_string(file_path)))
                .collect();

            let mut sources = BTreeMap::new();
            let mut errors = Vec::new();
            for (file_path, result) in read_results {
                match result {
                    Ok(code) => {
                        sources.insert(file_path, code);
                    }
                    Err(e) => {
                        if self.verbose {
                            eprintln!("{} {} - {}", "warning:".bold().yellow(), file_path, e);
                        }
                        errors.push(ParseErrorIssue {
                            file_path,
                            error: format!("Failed to read file: {}", e),
                        });
                    }
                }
            }

            let _ = self.source_read_errors.set(errors);
            sources
        })
    }

    pub fn source_read_errors(&self) -> &Vec<ParseErrorIssue> {
        self.sources();
        self.source_read_errors.get_or_init(Vec::new)
    }

    /// Unlocalized text in every source file (lazy initialization).
    pub fn occurrences(&self) -> &AllOccurrences {
        self.occurrences.get_or_init(|| {
            let rules = &self.scan_rules;
            self.sources()
                .par_iter()
                .filter_map(|(file_path, code)| {
                    let file_type = FileType::from_path(file_path);
                    let found = scan_for_unlocalized_text(code, file_type, rules);
                    (!found.is_empty()).then(|| (file_path.clone(), found))
                })
                .collect()
        })
    }

    /// Every key referenced from source, as written (wildcards included).
    pub fn used_keys(&self) -> &BTreeSet<String> {
        self.used_keys.get_or_init(|| {
            let rules = &self.key_rules;
            let per_file: Vec<BTreeSet<String>> = self
                .sources()
                .par_iter()
                .map(|(file_path, code)| {
                    scan_for_used_keys(code, FileType::from_path(file_path), rules)
                })
                .collect();
            per_file.into_iter().flatten().collect()
        })
    }

    /// Locale messages keyed by file path.
    ///
    /// # Errors
    ///
    /// Returns the locale scan failure, e.g. a missing locale directory.
    pub fn messages(&self) -> Result<&AllLocaleMessages> {
        match &self.locale_scan {
            Ok(result) => Ok(&result.messages),
            Err(e) => Err(anyhow!("{:#}", e)),
        }
    }

    /// Locale files that could not be read or parsed.
    pub fn message_parse_errors(&self) -> Vec<ParseErrorIssue> {
        match &self.locale_scan {
            Ok(result) => result
                .warnings
                .iter()
                .map(|warning| ParseErrorIssue {
                    file_path: warning.file_path.clone(),
                    error: warning.error.clone(),
                })
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Locale file that `extract` writes new keys to: `localePath`, or
    /// `default.json` under the locale directory when unset.
    pub fn target_locale_file(&self) -> PathBuf {
        if self.config.locale_path.trim().is_empty() {
            self.locale_dir.join("default.json")
        } else {
            resolve_relative(&self.root_dir, &self.config.locale_path)
        }
    }

    /// `typoDictionary` resolved against the project root.
    pub fn dictionary_path(&self) -> PathBuf {
        resolve_relative(&self.root_dir, &self.config.typo_dictionary)
    }
}

/// Join `relative` onto `root` without producing `././x` style paths.
fn resolve_relative(root: &Path, relative: &str) -> PathBuf {
    let p = Path::new(relative);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    let is_cur_dir = root.components().all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        root.join(rel)
    }
}

fn collect_files(
    config: &Config,
    root: &str,
    target: Option<&Path>,
    verbose: bool,
) -> BTreeSet<String> {
    let options = ScanOptions::from_config(config);

    let result = match target {
        Some(path) if path.is_file() => {
            return BTreeSet::from([path.to_string_lossy().to_string()]);
        }
        // An explicit directory replaces the configured includes.
        Some(dir) => scan_files(
            &dir.to_string_lossy(),
            &ScanOptions {
                includes: &[],
                ..options
            },
            None,
            verbose,
        ),
        None => scan_files(root, &options, None, verbose),
    };

    if result.skipped_count > 0 {
        eprintln!(
            "{} {} path(s) skipped due to access errors{}",
            "warning:".bold().yellow(),
            result.skipped_count,
            if verbose { "" } else { " (use -v for details)" }
        );
    }

    result.files
}
