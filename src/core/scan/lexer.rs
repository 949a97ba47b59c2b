use std::sync::LazyLock;

use regex::Regex;

use super::{Candidate, CandidateKind, SourceText};

static QUOTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"'([^']+)'|"([^"]+)"|`([^`]+)`"#).unwrap());

static TAG_TEXT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">([^<>]+)<").unwrap());

/// Extract candidates line by line, skipping comments.
///
/// For each line, quoted candidates come first (left to right), then tag-text
/// candidates. A line that starts a block comment is skipped until `*/`;
/// text after `*/` on the closing line is still scanned.
pub fn tokenize<'a>(source: &SourceText<'a>) -> Vec<Candidate<'a>> {
    let mut candidates = Vec::new();
    let mut in_block_comment = false;

    for (index, line) in source.lines().iter().enumerate() {
        let mut scan_from = 0;

        if in_block_comment {
            match line.find("*/") {
                Some(pos) => {
                    in_block_comment = false;
                    scan_from = pos + 2;
                }
                None => continue,
            }
        }

        let trimmed = line.trim_start();
        if scan_from == 0 {
            if trimmed.starts_with("//") {
                continue;
            }
            if trimmed.starts_with("/*") {
                let opener = line.len() - trimmed.len();
                match line[opener + 2..].find("*/") {
                    Some(pos) => scan_from = opener + 2 + pos + 2,
                    None => {
                        in_block_comment = true;
                        continue;
                    }
                }
            }
        }

        let base = source.line_start(index);
        let rest = &line[scan_from..];

        for caps in QUOTED_RE.captures_iter(rest) {
            let Some(whole) = caps.get(0) else { continue };
            let Some(text) = caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)) else {
                continue;
            };
            candidates.push(Candidate {
                text: &source.code[base + scan_from + text.start()..base + scan_from + text.end()],
                kind: CandidateKind::Quoted,
                start: base + scan_from + whole.start(),
                line: index,
            });
        }

        for caps in TAG_TEXT_RE.captures_iter(rest) {
            let Some(raw) = caps.get(1) else { continue };
            let trimmed_text = raw.as_str().trim();
            if trimmed_text.is_empty()
                || (trimmed_text.starts_with('{') && trimmed_text.ends_with('}'))
            {
                continue;
            }
            let leading = raw.as_str().len() - raw.as_str().trim_start().len();
            let start = base + scan_from + raw.start() + leading;
            candidates.push(Candidate {
                text: &source.code[start..start + trimmed_text.len()],
                kind: CandidateKind::TagText,
                start,
                line: index,
            });
        }
    }

    candidates
}
