//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format.
//! Separate from core logic to allow i18nscan to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, KeysSummary};
use crate::issues::{Issue, Report, ReportLocation, Severity};
use crate::locale::{ExtractOutcome, InsertOutcome};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    // Calculate max line number width for alignment
    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(source_files: usize, locale_files: usize) {
    print_success_to(source_files, locale_files, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(source_files: usize, locale_files: usize, writer: &mut W) {
    let mut checked = Vec::new();
    if source_files > 0 || locale_files == 0 {
        checked.push(format!("{} source {}", source_files, plural(source_files, "file")));
    }
    if locale_files > 0 {
        checked.push(format!("{} locale {}", locale_files, plural(locale_files, "file")));
    }
    let msg = format!("Checked {} - no issues found", checked.join(", "));
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print a warning about files that could not be read or parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read or parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

pub fn print(result: &CommandResult, verbose: bool) {
    let stdout = &mut io::stdout().lock();
    match &result.summary {
        CommandSummary::Scan | CommandSummary::Unused | CommandSummary::Typos => {
            report_to(&result.issues, stdout);
            if result.issues.is_empty() {
                print_success_to(
                    result.source_files_checked,
                    result.locale_files_checked,
                    stdout,
                );
            }
        }
        CommandSummary::Keys(summary) => {
            print_keys_to(summary, stdout);
            report_to(&result.issues, stdout);
        }
        CommandSummary::Extract(outcome) => print_extract_to(outcome, stdout),
    }

    print_parse_warning(result.parse_error_count, verbose);
}

/// One key per line, then a count.
pub fn print_keys_to<W: Write>(summary: &KeysSummary, writer: &mut W) {
    for key in &summary.keys {
        let _ = writeln!(writer, "{}", key);
    }
    let _ = writeln!(
        writer,
        "{} {} {} in use",
        SUCCESS_MARK.green(),
        summary.keys.len(),
        plural(summary.keys.len(), "key")
    );
}

/// Diff-style preview (or confirmation) of an extract.
pub fn print_extract_to<W: Write>(outcome: &ExtractOutcome, writer: &mut W) {
    let location = format!("{}:{}", outcome.source_file.display(), outcome.line);
    let _ = writeln!(writer, "  {} {}", "-->".blue(), location);
    let _ = writeln!(writer, "  {} {}", "-".red(), outcome.before.trim_end());
    let _ = writeln!(writer, "  {} {}", "+".green(), outcome.after.trim_end());

    let locale = outcome.locale_file.display();
    let key_line = match outcome.locale_change {
        None => format!("reusing key {} from {}", outcome.key.cyan(), locale),
        Some(InsertOutcome::Unchanged) => {
            format!("key {} already holds this text in {}", outcome.key.cyan(), locale)
        }
        Some(InsertOutcome::Added) if outcome.applied => {
            format!("added key {} to {}", outcome.key.cyan(), locale)
        }
        Some(InsertOutcome::Added) => {
            format!("would add key {} to {}", outcome.key.cyan(), locale)
        }
    };
    let _ = writeln!(writer, "  {} {} \"{}\"", "=".blue(), key_line, outcome.text);

    if outcome.applied {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Extracted \"{}\" as {}", outcome.text, outcome.qualified_key).green()
        );
    } else {
        let _ = writeln!(writer, "Run with {} to write these changes.", "--apply".cyan());
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let (file_path, line, col, source_line) = extract_location_info(&loc);

    // Print severity and message (cargo-style)
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Clickable location; file-level issues have no line
    if line == 0 {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path);
    } else {
        let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), file_path, line, col);
    }

    if let Some(source_line) = source_line {
        let caret_char = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // col is 1-based
        let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            plural(total_problems, "problem"),
            total_errors,
            plural(total_errors, "error").red(),
            total_warnings,
            plural(total_warnings, "warning").yellow()
        );
    }
}

fn extract_location_info<'a>(
    loc: &'a ReportLocation<'a>,
) -> (&'a str, usize, usize, Option<&'a str>) {
    match loc {
        ReportLocation::Source(ctx) => (
            ctx.file_path(),
            ctx.line(),
            ctx.col(),
            Some(&ctx.source_line),
        ),
        ReportLocation::Message(ctx) => (ctx.file_path(), ctx.line(), ctx.col(), None),
        ReportLocation::File { path } => (path, 0, 0, None),
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Source(ctx) => Some(ctx.line()),
            ReportLocation::Message(ctx) => Some(ctx.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}
