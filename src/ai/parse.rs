//! Parsing model answers.
//!
//! Models wrap JSON in code fences, use single quotes, leave keys unquoted
//! or add trailing commas. The answer is parsed as-is first and repaired
//! once if that fails.

use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde_json::Value;

use crate::utils::word_alternation;

static CODE_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```json\n?|```\n?").unwrap());
static UNQUOTED_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([{,]\s*)(\w+)(\s*:)").unwrap());
static TRAILING_COMMA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*([}\]])").unwrap());

/// Lines around a found text that are checked for exclusions.
const CONTEXT_LINES: usize = 2;

pub fn strip_code_fences(raw: &str) -> String {
    CODE_FENCE_RE.replace_all(raw, "").trim().to_string()
}

/// Fix common JSON mistakes: unquoted keys, single quotes, trailing commas
/// and raw newlines.
pub fn repair_json(text: &str) -> String {
    let fixed = UNQUOTED_KEY_RE.replace_all(text, "$1\"$2\"$3");
    let fixed = fixed.replace('\'', "\"");
    let fixed = TRAILING_COMMA_RE.replace_all(&fixed, "$1");
    fixed.replace('\n', "")
}

/// Texts listed in a model answer (`[{"text": ...}]`, plain strings accepted).
pub fn parse_ai_texts(raw: &str) -> Result<Vec<String>> {
    let cleaned = strip_code_fences(raw);
    let value: Value = match serde_json::from_str(&cleaned) {
        Ok(value) => value,
        Err(_) => serde_json::from_str(&repair_json(&cleaned))
            .with_context(|| format!("Unable to parse AI output: {}", cleaned))?,
    };

    let Value::Array(items) = value else {
        bail!("AI output is not a JSON array");
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(text) => Some(text),
            Value::Object(mut map) => match map.remove("text") {
                Some(Value::String(text)) => Some(text),
                _ => None,
            },
            _ => None,
        })
        .filter(|text| !text.is_empty())
        .collect())
}

/// Drop texts the model got wrong, and duplicates.
///
/// A text whose first line in `code` (quoted match preferred) is near a
/// translation call with that text, or inside a `console.log` /
/// `console.debug` / `log.dev.debug` call, is dropped. Texts not found in
/// `code` are kept.
pub fn filter_ai_texts(texts: Vec<String>, code: &str, function_names: &[String]) -> Vec<String> {
    let lines: Vec<&str> = code.split('\n').collect();
    let calls = word_alternation(function_names);

    let mut kept: Vec<String> = Vec::new();
    for text in texts {
        if kept.contains(&text) || is_false_positive(&text, &lines, &calls) {
            continue;
        }
        kept.push(text);
    }
    kept
}

fn find_text_line(text: &str, lines: &[&str]) -> Option<usize> {
    let single = format!("'{}'", text);
    let double = format!("\"{}\"", text);
    lines
        .iter()
        .position(|line| line.contains(&single) || line.contains(&double))
        .or_else(|| lines.iter().position(|line| line.contains(text)))
}

fn is_false_positive(text: &str, lines: &[&str], calls: &str) -> bool {
    let Some(line) = find_text_line(text, lines) else {
        return false;
    };

    let from = line.saturating_sub(CONTEXT_LINES);
    let to = (line + CONTEXT_LINES + 1).min(lines.len());
    let surrounding = lines[from..to].join("\n");
    let escaped = regex::escape(text);

    let wrapped = !calls.is_empty()
        && Regex::new(&format!(
            r#"(?:{})\s*\(\s*['"][^'"]*{}['"]\s*[,)]"#,
            calls, escaped
        ))
        .is_ok_and(|re| re.is_match(&surrounding));
    let logged = Regex::new(&format!(
        r"(?:console\.log|console\.debug|log\.dev\.debug)\s*\([^)]*{}[^)]*\)",
        escaped
    ))
    .is_ok_and(|re| re.is_match(&surrounding));

    wrapped || logged
}
