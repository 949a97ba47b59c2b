//! Exclusion predicates for unlocalized-text candidates.
//!
//! Every predicate is a pure function of the candidate, its surroundings and
//! the compiled [`ScanRules`]. A candidate is reported only when no predicate
//! excludes it. Text-only checks run first, then line checks, then checks
//! that slice windows out of the whole file.

use std::{collections::HashSet, sync::LazyLock};

use anyhow::{Context, Result};
use regex::Regex;

use super::{Candidate, SourceText};
use crate::{
    config::Config,
    core::FileType,
    utils::{window, word_alternation},
};

/// Bare tag tokens that are markup, not text.
const STRUCTURAL_TOKENS: &[&str] = &[
    "\\n", "<tr>", "<td>", "<th>", "<span>", "<div>", "<p>", "<a>", "<button>", "<input>",
    "<textarea>", "<label>", "<select>", "<option>", "<img>", "<table>", "<b>", "<h1>", "<h2>",
    "<h3>", "<h4>", "<h5>", "<h6>", "</h1>", "</h2>", "</h3>", "</h4>", "</h5>", "</h6>", "</b>",
    "</span>", "</div>", "</p>", "</a>", "</button>", "</input>", "</textarea>", "</label>",
    "</select>", "</option>", "</img>", "</tr>", "</td>", "</th>", "</table>",
];

static ATTRIBUTE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(className|style|width|height|id|src|alt|href|type|placeholder|value)$").unwrap()
});
static UTILITY_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(bg-|text-|border-|p-|m-|flex|grid|col-|row-|sm:|md:|lg:|xl:|2xl:)").unwrap()
});
static CSS_LITERAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(\.\d+)?(px|em|rem|vh|vw|%)|#[0-9A-Fa-f]{3,6})$").unwrap()
});
static ASCII_LETTER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z]").unwrap());
static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());
static CONSTANT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z0-9_]+$").unwrap());

static IMPORT_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(import|require|export)").unwrap());
static IMPORT_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*import\s*\{").unwrap());
static IMPORT_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\}\s*from").unwrap());
static REQUIRE_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*const\s*\{").unwrap());
static REQUIRE_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\}\s*=\s*require").unwrap());

static EQUALITY_BEFORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+|\))\s*(===?|!==?)\s*$").unwrap());
static EQUALITY_AFTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(===?|!==?)\s*(\w+|\()").unwrap());

static STYLE_PROP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(class|className|style)\s*=\s*$").unwrap());
static COMPLEX_EXPR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+\s*\(|\?|:|\+|\-|\*|/|\{\s*\w+\s*:)").unwrap());

static KEY_FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\b(name|id|field|value)\s*:\s*["']$"#).unwrap());
static LABEL_FIELD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\blabel\s*:").unwrap());

static BRACKET_ACCESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\b(\w+)\[\s*['"][\w.\-]+['"]\s*\]"#).unwrap());

static HANDLEBARS_T_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\{\{|\()\s*t\s+$").unwrap());

static DATA_I18N_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"data-i18n\s*=\s*["']([^"']+)["']"#).unwrap());
static ATTR_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\w+\]").unwrap());

static CAMEL_CASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-zA-Z0-9]*$").unwrap());
static SNAKE_CASE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z]+_[a-z]+$").unwrap());
static UNIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"px|em|%|pt|in|cm|mm|ex|pc|vh|vw|vmin|vmax|deg|rad|grad|turn|ms|[a-zA-Z]").unwrap()
});
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(\.\d+)?([eE][-+]?\d+)?$").unwrap());
static PATH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^/[^/]+/.*$").unwrap());
static HEX_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap());
static HTML_HEAD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^<(\w+)").unwrap());
static HTML_TAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</(\w+)>").unwrap());

/// Window sizes, in bytes, for checks that look around a candidate.
const SHORT_WINDOW: usize = 50;
const FIELD_WINDOW: usize = 150;
const STYLE_PROP_WINDOW: usize = 64;

/// Compiled, immutable snapshot of the configurable parts of the classifier.
#[derive(Debug, Clone)]
pub struct ScanRules {
    ignored_prop: Option<Regex>,
    ignored_value_prefix: Option<Regex>,
    ignored_function: Option<Regex>,
    i18n_call: Regex,
    i18n_call_openers: Vec<String>,
    ignore_texts: HashSet<String>,
    ignore_camel_case: bool,
    ignore_snake_case: bool,
    ignore_dot_expression: bool,
    ignore_html_text: bool,
}

fn compile_fragments(fragments: &[String], build: impl Fn(&str) -> String) -> Result<Option<Regex>> {
    if fragments.is_empty() {
        return Ok(None);
    }
    let pattern = build(&fragments.join("|"));
    Regex::new(&pattern)
        .map(Some)
        .with_context(|| format!("Failed to compile pattern: {}", pattern))
}

impl ScanRules {
    pub fn from_config(config: &Config) -> Result<Self> {
        let names = config.detect_prefix_names();
        let i18n_call = Regex::new(&format!(r#"({})\s*\(\s*['"]"#, word_alternation(&names)))
            .context("Failed to compile i18n call pattern")?;

        Ok(Self {
            ignored_prop: compile_fragments(&config.ignored_props, |body| {
                format!(r#"\b\.?(?:{})\s*(=|:)\s*(["'])"#, body)
            })?,
            ignored_value_prefix: compile_fragments(&config.ignored_value_prefixes, |body| {
                format!("^(?:{})", body)
            })?,
            ignored_function: compile_fragments(&config.ignored_functions, |body| {
                format!(r"\b(?:{})\s*\($", body)
            })?,
            i18n_call,
            i18n_call_openers: names.iter().map(|name| format!("{}(", name)).collect(),
            ignore_texts: config.ignore_texts.iter().cloned().collect(),
            ignore_camel_case: config.ignore_camel_case,
            ignore_snake_case: config.ignore_snake_case,
            ignore_dot_expression: config.ignore_dot_expression,
            ignore_html_text: config.ignore_html_text,
        })
    }

    pub fn is_ignored_literal(&self, text: &str) -> bool {
        self.ignore_texts.contains(text)
    }
}

/// Classify a quoted-literal candidate from the line pass.
pub fn is_unlocalized(
    source: &SourceText,
    candidate: &Candidate,
    file_type: FileType,
    rules: &ScanRules,
) -> bool {
    let text = candidate.text;
    let current = source.line(candidate.line).unwrap_or_default();
    let previous = candidate.line.checked_sub(1).and_then(|i| source.line(i));
    let line_before = window(current, 0, candidate.start - source.line_start(candidate.line));

    should_be_localized(text, current, rules)
        && !is_ignored_text(text, rules)
        && !rules.is_ignored_literal(text)
        && !is_require_or_import(current, previous)
        && !is_inside_i18n_call(current, previous, rules)
        && !(file_type == FileType::Handlebars && is_handlebars_i18n(line_before))
        && !(file_type == FileType::Html && is_html_i18n(source.code, candidate))
        && !is_equal_expression(source.code, candidate)
        && !is_inside_complex_prop(source.code, candidate)
        && !is_name_or_id_field(source.code, candidate)
        && !is_function_param(source.code, candidate, rules)
        && !is_object_property(source.code, candidate)
}

/// Classify text found between `>` and `<`.
pub fn is_unlocalized_tag_text(source: &SourceText, candidate: &Candidate, rules: &ScanRules) -> bool {
    let current = source.line(candidate.line).unwrap_or_default();
    let text = candidate.text;

    should_be_localized(text, current, rules)
        && !is_ignored_text(text, rules)
        && !rules.is_ignored_literal(text)
}

/// Text-level and line-level gate shared by every candidate kind.
pub fn should_be_localized(text: &str, current_line: &str, rules: &ScanRules) -> bool {
    if STRUCTURAL_TOKENS.contains(&text) {
        return false;
    }
    if is_ignored_prop_value(text, current_line, rules) {
        return false;
    }
    if rules
        .ignored_value_prefix
        .as_ref()
        .is_some_and(|re| re.is_match(text))
    {
        return false;
    }
    if ATTRIBUTE_NAME_RE.is_match(text)
        || UTILITY_CLASS_RE.is_match(text)
        || CSS_LITERAL_RE.is_match(text)
    {
        return false;
    }
    has_minimum_content(text)
}

pub fn has_minimum_content(text: &str) -> bool {
    text.len() > 1
        && text != "\"\""
        && text != "''"
        && ASCII_LETTER_RE.is_match(text)
        && !DIGITS_RE.is_match(text)
        && !CONSTANT_RE.is_match(text)
}

/// `prop="text"` or `prop: 'text'` on the current line, for a configured prop.
pub fn is_ignored_prop_value(text: &str, current_line: &str, rules: &ScanRules) -> bool {
    let Some(re) = &rules.ignored_prop else {
        return false;
    };
    re.captures_iter(current_line).any(|caps| {
        let (Some(whole), Some(quote)) = (caps.get(0), caps.get(2)) else {
            return false;
        };
        let rest = &current_line[whole.end()..];
        rest.strip_prefix(text)
            .is_some_and(|after| after.starts_with(quote.as_str()))
    })
}

pub fn is_require_or_import(current: &str, previous: Option<&str>) -> bool {
    if IMPORT_LINE_RE.is_match(current) || IMPORT_CLOSE_RE.is_match(current) {
        return true;
    }
    let Some(previous) = previous else {
        return false;
    };
    IMPORT_OPEN_RE.is_match(previous)
        || (REQUIRE_OPEN_RE.is_match(previous) && REQUIRE_CLOSE_RE.is_match(current))
}

pub fn is_equal_expression(code: &str, candidate: &Candidate) -> bool {
    let before = window(code, candidate.start.saturating_sub(SHORT_WINDOW), candidate.start);
    let after = window(code, candidate.end(), candidate.end() + SHORT_WINDOW);
    EQUALITY_BEFORE_RE.is_match(before) || EQUALITY_AFTER_RE.is_match(after)
}

/// Argument of a translation call, on the same line or right after `name(`
/// ending the previous line.
pub fn is_inside_i18n_call(current: &str, previous: Option<&str>, rules: &ScanRules) -> bool {
    if let Some(previous) = previous {
        let previous = previous.trim();
        if rules
            .i18n_call_openers
            .iter()
            .any(|opener| previous.ends_with(opener.as_str()))
        {
            return true;
        }
    }
    rules.i18n_call.is_match(current)
}

/// Inside `class={...}`, `className={...}` or `style={...}` holding an expression.
pub fn is_inside_complex_prop(code: &str, candidate: &Candidate) -> bool {
    let Some(last_open) = code[..candidate.start].rfind('{') else {
        return false;
    };
    let Some(next_close) = code[candidate.text_end()..].find('}') else {
        return false;
    };

    let before_brace = window(code, last_open.saturating_sub(STYLE_PROP_WINDOW), last_open);
    if !STYLE_PROP_RE.is_match(before_brace) {
        return false;
    }

    let between = &code[last_open + 1..candidate.text_end() + next_close];
    COMPLEX_EXPR_RE.is_match(between)
}

/// Value of `name:`/`id:`/`field:`/`value:` in an object that also has a `label:`.
pub fn is_name_or_id_field(code: &str, candidate: &Candidate) -> bool {
    let window_start = candidate.start.saturating_sub(FIELD_WINDOW);
    let before = window(code, window_start, candidate.start + 1);
    if !KEY_FIELD_RE.is_match(before) {
        return false;
    }

    let Some(object_start) = code[..candidate.start].rfind('{') else {
        return false;
    };
    if object_start < window_start {
        return false;
    }
    let object_end = code[candidate.text_end()..]
        .find('}')
        .map(|pos| candidate.text_end() + pos)
        .unwrap_or(code.len());
    LABEL_FIELD_RE.is_match(&code[object_start..object_end])
}

/// Direct argument of a configured function: `fn(` right before the quote.
pub fn is_function_param(code: &str, candidate: &Candidate, rules: &ScanRules) -> bool {
    let Some(re) = &rules.ignored_function else {
        return false;
    };
    let before = window(code, candidate.start.saturating_sub(SHORT_WINDOW), candidate.start);
    re.is_match(before)
}

/// `obj['key']` bracket access near the candidate.
pub fn is_object_property(code: &str, candidate: &Candidate) -> bool {
    let around = window(
        code,
        candidate.start.saturating_sub(SHORT_WINDOW),
        candidate.text_end() + 4,
    );
    BRACKET_ACCESS_RE.is_match(around)
}

/// Argument of the Handlebars `t` helper: `{{t '...` or `(t '...`.
///
/// `line_before` is the current line up to the opening quote.
pub fn is_handlebars_i18n(line_before: &str) -> bool {
    HANDLEBARS_T_RE.is_match(line_before)
}

/// The candidate is the value, or one part of the value, of a nearby `data-i18n` attribute.
pub fn is_html_i18n(code: &str, candidate: &Candidate) -> bool {
    let around = window(code, candidate.start.saturating_sub(SHORT_WINDOW), candidate.end());
    let Some(caps) = DATA_I18N_RE.captures(around) else {
        return false;
    };
    let Some(value) = caps.get(1).map(|m| m.as_str()) else {
        return false;
    };

    let text = candidate.text.trim();
    if value.trim() == text {
        return true;
    }
    let text_without_attr = ATTR_PREFIX_RE.replace(text, "");

    value.split(';').any(|part| {
        if part.contains('[') {
            part.split(']')
                .nth(1)
                .is_some_and(|key| !key.is_empty() && key.trim() == text_without_attr)
        } else {
            part.trim() == text
        }
    })
}

/// Shape filters: identifiers, numbers, paths, colors and optionally markup.
pub fn is_ignored_text(text: &str, rules: &ScanRules) -> bool {
    (rules.ignore_camel_case && is_camel_case(text))
        || (rules.ignore_snake_case && is_snake_case(text))
        || (rules.ignore_dot_expression && is_dot_expression(text))
        || is_number(text)
        || is_path(text)
        || is_color(text)
        || (rules.ignore_html_text && is_html_code(text))
}

pub fn is_camel_case(text: &str) -> bool {
    CAMEL_CASE_RE.is_match(text)
}

pub fn is_snake_case(text: &str) -> bool {
    SNAKE_CASE_RE.is_match(text)
}

pub fn is_dot_expression(text: &str) -> bool {
    text.starts_with('.') && text.len() > 1
}

/// A number, optionally followed by one unit.
pub fn is_number(text: &str) -> bool {
    NUMBER_RE.is_match(&UNIT_RE.replace(text, ""))
}

pub fn is_path(text: &str) -> bool {
    PATH_RE.is_match(text)
}

pub fn is_color(text: &str) -> bool {
    HEX_COLOR_RE.is_match(text)
}

/// `<tag ...>...</tag>` with matching names, or a self-closing tag.
pub fn is_html_code(text: &str) -> bool {
    if text.ends_with("/>") {
        return true;
    }
    match (HTML_HEAD_RE.captures(text), HTML_TAIL_RE.captures(text)) {
        (Some(head), Some(tail)) => head.get(1).map(|m| m.as_str()) == tail.get(1).map(|m| m.as_str()),
        _ => false,
    }
}
