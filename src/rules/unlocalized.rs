//! Unlocalized text rule.
//!
//! Turns scanner occurrences into reportable issues, marking the ones an AI
//! review corroborated.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    core::{
        DetectionSource, SourceContext, SourceLocation,
        context::{AllOccurrences, ScanContext},
    },
    issues::UnlocalizedTextIssue,
};

pub fn check_unlocalized_text_issues(
    ctx: &ScanContext,
    ai_confirmed: &BTreeSet<String>,
) -> Vec<UnlocalizedTextIssue> {
    check_unlocalized_text(ctx.occurrences(), ctx.sources(), ai_confirmed)
}

/// Build one issue per occurrence.
///
/// The reported source line is the untrimmed line from `sources`, so the
/// caret lines up with the occurrence column.
pub fn check_unlocalized_text(
    occurrences: &AllOccurrences,
    sources: &BTreeMap<String, String>,
    ai_confirmed: &BTreeSet<String>,
) -> Vec<UnlocalizedTextIssue> {
    occurrences
        .iter()
        .flat_map(|(file_path, found)| {
            let lines: Vec<&str> = sources
                .get(file_path)
                .map(|code| code.split('\n').collect())
                .unwrap_or_default();

            found.iter().map(move |occurrence| {
                let source_line = lines
                    .get(occurrence.line - 1)
                    .map(|l| l.trim_end_matches('\r').to_string())
                    .unwrap_or_else(|| occurrence.current_line_text.clone());
                let source = if ai_confirmed.contains(&occurrence.text) {
                    DetectionSource::AiConfirmed
                } else {
                    DetectionSource::Heuristic
                };

                UnlocalizedTextIssue {
                    context: SourceContext::new(
                        SourceLocation::new(file_path, occurrence.line, occurrence.col),
                        source_line,
                    ),
                    text: occurrence.text.clone(),
                    source,
                }
            })
        })
        .collect()
}
