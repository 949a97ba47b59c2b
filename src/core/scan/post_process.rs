//! Whole-file pass for shapes the line scanner misses.
//!
//! Element text split over several lines (`<Button ...>\n  Click me\n</Button>`)
//! and template literals that span lines are only visible across line breaks.

use std::sync::LazyLock;

use regex::Regex;

use super::{
    Candidate, CandidateKind, SourceText,
    classifier::{is_function_param, is_ignored_text, should_be_localized},
    ScanRules,
};

static ELEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<([a-zA-Z]+)\s*([^>]*)>\s*([^<]+)\s*</([a-zA-Z]+)>").unwrap()
});

static TEMPLATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]*)`").unwrap());

const FORBIDDEN_IN_ELEMENT_TEXT: &[char] = &['<', '>', '{', '}', '(', ')', '='];

/// Candidates from the whole-file pass that pass the shared text filters.
///
/// Results are not deduplicated against the line pass; the caller drops any
/// whose text was already reported.
pub fn multiline_candidates<'a>(source: &SourceText<'a>, rules: &ScanRules) -> Vec<Candidate<'a>> {
    let mut found: Vec<Candidate<'a>> = Vec::new();

    for caps in ELEMENT_RE.captures_iter(source.code) {
        let (Some(open), Some(inner), Some(close)) = (caps.get(1), caps.get(3), caps.get(4)) else {
            continue;
        };
        if open.as_str() != close.as_str() {
            continue;
        }

        // Attribute values may hold `>` (arrow functions), so the text starts
        // after the last one.
        let segment = inner.as_str();
        let tail_start = segment.rfind('>').map(|pos| pos + 1).unwrap_or(0);
        let tail = &segment[tail_start..];
        let text = tail.trim();
        if text.is_empty() || text.contains(FORBIDDEN_IN_ELEMENT_TEXT) {
            continue;
        }

        let leading = tail.len() - tail.trim_start().len();
        let start = inner.start() + tail_start + leading;
        let candidate = Candidate {
            text: &source.code[start..start + text.len()],
            kind: CandidateKind::TagText,
            start,
            line: source.line_of_offset(start),
        };
        if passes_text_filters(source, &candidate, rules) && !contains_text(&found, text) {
            found.push(candidate);
        }
    }

    for caps in TEMPLATE_RE.captures_iter(source.code) {
        let (Some(whole), Some(body)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        // Single-line templates were already classified by the line pass.
        if !body.as_str().contains('\n') {
            continue;
        }
        let candidate = Candidate {
            text: body.as_str(),
            kind: CandidateKind::Template,
            start: whole.start(),
            line: source.line_of_offset(whole.start()),
        };
        if passes_text_filters(source, &candidate, rules)
            && !is_function_param(source.code, &candidate, rules)
            && !contains_text(&found, candidate.text)
        {
            found.push(candidate);
        }
    }

    found
}

fn passes_text_filters(source: &SourceText, candidate: &Candidate, rules: &ScanRules) -> bool {
    let line = source.line(candidate.line).unwrap_or_default();
    should_be_localized(candidate.text, line, rules)
        && !is_ignored_text(candidate.text, rules)
        && !rules.is_ignored_literal(candidate.text)
}

fn contains_text(found: &[Candidate], text: &str) -> bool {
    found.iter().any(|c| c.text == text)
}
