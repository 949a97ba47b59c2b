use std::collections::BTreeSet;

use crate::issues::Issue;
use crate::locale::ExtractOutcome;

#[derive(Debug)]
pub enum CommandSummary {
    Scan,
    Unused,
    Typos,
    Keys(KeysSummary),
    Extract(Box<ExtractOutcome>),
}

#[derive(Debug)]
pub struct KeysSummary {
    pub keys: BTreeSet<String>,
}

/// Result of running an i18nscan command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when any issue was found.
    /// If false, always exit 0.
    pub exit_on_errors: bool,
    /// All issues found during the command, sorted.
    pub issues: Vec<Issue>,
    /// Number of files that could not be read or parsed.
    pub parse_error_count: usize,
    /// Number of source files that were checked.
    pub source_files_checked: usize,
    /// Number of locale files that were checked.
    /// 0 if locale files were not needed.
    pub locale_files_checked: usize,
}
