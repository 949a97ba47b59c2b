use super::{CommandResult, CommandSummary};
use crate::issues::{Issue, Severity};

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    source_files_checked: usize,
    locale_files_checked: usize,
    exit_on_errors: bool,
) -> CommandResult {
    issues.sort();

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();

    let warning_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        issues,
        parse_error_count,
        source_files_checked,
        locale_files_checked,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::cli::commands::helper::*;
    use crate::core::{MessageContext, MessageLocation};
    use crate::issues::{ParseErrorIssue, UnusedKeyIssue};

    #[test]
    fn test_finish_counts_and_sorts() {
        let issues = vec![
            Issue::UnusedKey(UnusedKeyIssue {
                context: MessageContext::new(
                    MessageLocation::with_line("locale/default.json", 2),
                    "save",
                    "Save",
                ),
                qualified_key: "default.save".to_string(),
            }),
            Issue::ParseError(ParseErrorIssue {
                file_path: "locale/broken.json".to_string(),
                error: "Failed to parse JSON".to_string(),
            }),
        ];

        let result = finish(CommandSummary::Unused, issues, 3, 2, true);

        assert_eq!(result.error_count, 1);
        assert_eq!(result.warning_count, 1);
        assert_eq!(result.parse_error_count, 1);
        assert!(matches!(result.issues[0], Issue::ParseError(_)));
    }
}
