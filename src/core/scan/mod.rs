//! Unlocalized-text detection.
//!
//! Detection runs in three stages over raw source text, without parsing:
//!
//! 1. `lexer`: line-by-line candidate extraction (quoted literals and
//!    `>text<` runs) with block-comment tracking.
//! 2. `classifier`: named exclusion predicates; a candidate is reported only
//!    if none of them fire.
//! 3. `post_process`: a whole-file pass for `<tag>text</tag>` pairs and
//!    multi-line template literals, deduplicated by text.

pub mod classifier;
pub mod lexer;
pub mod post_process;

pub use classifier::ScanRules;

use crate::core::{FileType, Occurrence};

/// What kind of span a candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    /// `'...'`, `"..."` or `` `...` `` on a single line.
    Quoted,
    /// Text between `>` and `<`.
    TagText,
    /// A backtick literal found by the whole-file pass.
    Template,
}

impl CandidateKind {
    fn delimiter_len(self) -> usize {
        match self {
            CandidateKind::Quoted | CandidateKind::Template => 1,
            CandidateKind::TagText => 0,
        }
    }
}

/// A located, not yet classified span of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub text: &'a str,
    pub kind: CandidateKind,
    /// Byte offset of the opening delimiter, or of the text itself for tag text.
    pub start: usize,
    /// 0-based line index of `start`.
    pub line: usize,
}

impl Candidate<'_> {
    pub fn text_start(&self) -> usize {
        self.start + self.kind.delimiter_len()
    }

    pub fn text_end(&self) -> usize {
        self.text_start() + self.text.len()
    }

    /// Offset just past the closing delimiter.
    pub fn end(&self) -> usize {
        self.text_end() + self.kind.delimiter_len()
    }
}

/// Source text split into lines, with the byte offset of each line start.
pub struct SourceText<'a> {
    pub code: &'a str,
    lines: Vec<&'a str>,
    line_starts: Vec<usize>,
}

impl<'a> SourceText<'a> {
    pub fn new(code: &'a str) -> Self {
        let lines: Vec<&str> = code.split('\n').collect();
        let mut line_starts = Vec::with_capacity(lines.len());
        let mut offset = 0;
        for line in &lines {
            line_starts.push(offset);
            offset += line.len() + 1;
        }
        Self {
            code,
            lines,
            line_starts,
        }
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&'a str> {
        self.lines.get(index).copied()
    }

    pub fn line_start(&self, index: usize) -> usize {
        self.line_starts.get(index).copied().unwrap_or(self.code.len())
    }

    /// 0-based line index containing `offset`.
    pub fn line_of_offset(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        }
    }

    fn occurrence(&self, text: &str, index: usize) -> Occurrence {
        let line_index = self.line_of_offset(index);
        let line = self.line(line_index).unwrap_or_default();
        let in_line = index.saturating_sub(self.line_start(line_index)).min(line.len());
        let col = line
            .get(..in_line)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(in_line)
            + 1;

        Occurrence {
            text: text.to_string(),
            index,
            line: line_index + 1,
            col,
            current_line_text: line.trim().to_string(),
            previous_line_text: line_index
                .checked_sub(1)
                .and_then(|i| self.line(i))
                .map(|l| l.trim().to_string()),
            next_line_text: self.line(line_index + 1).map(|l| l.trim().to_string()),
        }
    }
}

/// Find every piece of text in `code` that looks like user-facing language
/// not yet wrapped in a translation call.
///
/// Results are ordered by discovery: line-pass candidates in source order,
/// then post-processor additions. The same input always produces the same
/// output.
pub fn scan_for_unlocalized_text(
    code: &str,
    file_type: FileType,
    rules: &ScanRules,
) -> Vec<Occurrence> {
    let source = SourceText::new(code);
    let mut occurrences: Vec<Occurrence> = Vec::new();

    for candidate in lexer::tokenize(&source) {
        let keep = match candidate.kind {
            CandidateKind::Quoted => classifier::is_unlocalized(&source, &candidate, file_type, rules),
            CandidateKind::TagText | CandidateKind::Template => {
                classifier::is_unlocalized_tag_text(&source, &candidate, rules)
                    && !occurrences
                        .iter()
                        .any(|o| o.line == candidate.line + 1 && o.text == candidate.text)
            }
        };
        if keep {
            occurrences.push(source.occurrence(candidate.text, candidate.start));
        }
    }

    if file_type.has_markup() {
        for candidate in post_process::multiline_candidates(&source, rules) {
            if !occurrences.iter().any(|o| o.text == candidate.text) {
                occurrences.push(source.occurrence(candidate.text, candidate.start));
            }
        }
    }

    occurrences
}
