//! Translation-key usage extraction.
//!
//! Collects every key a source file references so unused-key analysis can
//! compare them against the locale files. Dynamic parts of a key become `*`
//! wildcards:
//!
//! - `` t(`menu.${id}.label`) `` → `menu.*.label`
//! - `'i18n:status.' + level` → `status.*`
//!
//! A wildcard in the middle matches exactly one segment; a trailing `.*`
//! matches one or more remaining segments (see [`key_covers`]).

use std::{collections::BTreeSet, sync::LazyLock};

use anyhow::{Context, Result};
use regex::Regex;

use crate::{config::Config, core::FileType, utils::word_alternation};

// ============================================================
// Patterns
// ============================================================

static DATA_I18N_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"data-i18n=(?:"([^"]+)"|'([^']+)')"#).unwrap());

static HANDLEBARS_T_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\{\{\s*t\s+['"]([^'"]+)['"]"#).unwrap());

static PREFIXED_LITERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'i18n:([^']+)'").unwrap());

static PREFIXED_CONCAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'i18n:([^']+)'\s*\+").unwrap());

static KEY_PROPERTY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"["'\w-]+(?:Key|key|i18n)["']?\s*[=:]\s*(?:'([^'"`]+)'|"([^'"`]+)"|`([^'"`]+)`)"#)
        .unwrap()
});

static CUSTOM_ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"["'](?:label-i18n|title-i18n)["']\s*:\s*["']([^"']+)["']"#).unwrap()
});

static ATTR_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[.*?\]").unwrap());
static TRAILING_WILDCARDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\.\*)+$").unwrap());

/// Marker appended to a concatenated prefix so its dynamic tail becomes `*`.
const DYNAMIC_TAIL: &str = "${}";

/// Compiled call patterns for the configured translation functions.
#[derive(Debug, Clone)]
pub struct KeyUsageRules {
    call: Regex,
}

impl KeyUsageRules {
    /// Build from `i18nDetectPrefixNames` plus `i18nFunctionName`.
    pub fn new(config: &Config) -> Result<Self> {
        let mut names = config.detect_prefix_names();
        let function_name = config.i18n_function_name.trim();
        if !function_name.is_empty() && !names.iter().any(|n| n == function_name) {
            names.push(function_name.to_string());
        }

        // One alternative per quote kind; `${` ends a template key early.
        let pattern = format!(
            r#"(?:{})\(\s*(?:'([\w.\-]+)\s*(?:'|\)|,|\$\{{)|"([\w.\-]+)\s*(?:"|\)|,|\$\{{)|`([\w.\-]+)\s*(?:`|\)|,|\$\{{))"#,
            word_alternation(&names)
        );
        let call = Regex::new(&pattern).context("Failed to compile translation call pattern")?;
        Ok(Self { call })
    }
}

/// Extract the normalized keys referenced by `code`.
///
/// Never fails: input without any recognizable reference yields an empty set.
pub fn scan_for_used_keys(code: &str, file_type: FileType, rules: &KeyUsageRules) -> BTreeSet<String> {
    let mut raw: Vec<String> = Vec::new();

    collect_first_group(&rules.call, code, &mut raw);
    if file_type != FileType::Other {
        collect_first_group(&DATA_I18N_RE, code, &mut raw);
        collect_first_group(&HANDLEBARS_T_RE, code, &mut raw);
    }
    collect_first_group(&PREFIXED_LITERAL_RE, code, &mut raw);
    for caps in PREFIXED_CONCAT_RE.captures_iter(code) {
        if let Some(prefix) = caps.get(1) {
            raw.push(format!("{}{}", prefix.as_str(), DYNAMIC_TAIL));
        }
    }
    collect_first_group(&KEY_PROPERTY_RE, code, &mut raw);

    let mut keys: BTreeSet<String> = raw.iter().flat_map(|key| normalize_key(key)).collect();

    // Custom attribute values are taken verbatim.
    for caps in CUSTOM_ATTRIBUTE_RE.captures_iter(code) {
        if let Some(key) = caps.get(1) {
            keys.insert(key.as_str().to_string());
        }
    }

    keys
}

/// Push the first participating capture group of every match.
fn collect_first_group(re: &Regex, code: &str, out: &mut Vec<String>) {
    for caps in re.captures_iter(code) {
        if let Some(m) = caps.iter().skip(1).flatten().next() {
            out.push(m.as_str().to_string());
        }
    }
}

/// Normalize one raw reference into zero or more keys.
///
/// Strips one `i18n:` prefix, splits `;`-separated lists, strips a leading
/// `[attr]` and turns dynamic or empty segments into `*`. Keys made only of
/// wildcards are dropped.
pub fn normalize_key(raw: &str) -> Vec<String> {
    let key = raw.replacen("i18n:", "", 1);
    key.split(';')
        .filter_map(normalize_single)
        .collect()
}

fn normalize_single(part: &str) -> Option<String> {
    let clean = ATTR_PREFIX_RE.replace(part, "");
    let clean = clean.trim();
    if clean.is_empty() {
        return None;
    }

    let joined = clean
        .split('.')
        .map(|segment| {
            if segment.is_empty() || segment.contains("${") || segment.contains('}') {
                "*"
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join(".");
    let key = TRAILING_WILDCARDS_RE.replace(&joined, ".*").into_owned();

    if key.split('.').all(|segment| segment == "*") {
        return None;
    }
    Some(key)
}

/// True if the used `pattern` accounts for the declared `key`.
///
/// A literal pattern must equal the key. An inner `*` matches exactly one
/// segment; a trailing `.*` matches one or more remaining segments.
///
/// ```
/// use i18nscan::core::key_usage::key_covers;
///
/// assert!(key_covers("menu.*", "menu.file.open"));
/// assert!(key_covers("menu.*.label", "menu.file.label"));
/// assert!(!key_covers("menu.*.label", "menu.file.sub.label"));
/// assert!(!key_covers("menu.*", "menu"));
/// ```
pub fn key_covers(pattern: &str, key: &str) -> bool {
    if !pattern.contains('*') {
        return pattern == key;
    }

    let pattern_segments: Vec<&str> = pattern.split('.').collect();
    let key_segments: Vec<&str> = key.split('.').collect();

    let (fixed, open_tail) = match pattern_segments.split_last() {
        Some((&"*", head)) if !head.is_empty() => (head, true),
        _ => (pattern_segments.as_slice(), false),
    };

    let length_ok = if open_tail {
        key_segments.len() > fixed.len()
    } else {
        key_segments.len() == fixed.len()
    };

    length_ok
        && fixed
            .iter()
            .zip(key_segments.iter())
            .all(|(pattern_segment, key_segment)| {
                *pattern_segment == "*" || pattern_segment == key_segment
            })
}
