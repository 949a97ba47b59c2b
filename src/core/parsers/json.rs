use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;
use walkdir::WalkDir;

use crate::core::{AllLocaleMessages, LocaleMessages, MessageContext, MessageLocation};

/// A locale file that could not be read or parsed.
#[derive(Debug, Clone)]
pub struct MessageScanWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScanMessagesResult {
    pub messages: AllLocaleMessages,
    pub warnings: Vec<MessageScanWarning>,
}

pub fn parse_json_file(path: &Path, namespace: &str) -> Result<LocaleMessages> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;
    parse_json_str(&content, path.to_string_lossy().as_ref(), namespace)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))
}

pub fn parse_json_str(content: &str, file_path: &str, namespace: &str) -> Result<LocaleMessages> {
    let json: Value = serde_json::from_str(content)?;
    let line_index = build_line_index(content);
    let mut messages = LocaleMessages::new(namespace, file_path);
    flatten_json(&json, String::new(), content, &line_index, &mut messages);
    Ok(messages)
}

/// Byte offsets where each line starts. Line 1 starts at offset 0.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// 1-based line number for a byte offset.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// Find the line where a dotted key is declared.
///
/// Each key part is searched after the previous one, and a match only counts
/// when it is followed by `:`, so `common.submit` finds the `"submit"` inside
/// `"common"` and not a value or a `"submit"` under another parent.
fn find_key_line(content: &str, key_path: &str, line_index: &[usize]) -> usize {
    let mut search_start = 0;
    for part in key_path.split('.') {
        let pattern = format!("\"{}\"", part);
        let remaining = &content[search_start..];

        let mut pos = 0;
        let mut found = false;
        while let Some(rel_pos) = remaining[pos..].find(&pattern) {
            let abs_pos = pos + rel_pos;
            let after_pattern = abs_pos + pattern.len();
            if remaining[after_pattern..].trim_start().starts_with(':') {
                search_start += after_pattern;
                found = true;
                break;
            }
            pos = abs_pos + 1;
        }

        if !found {
            break;
        }
    }

    if search_start > 0 {
        offset_to_line(line_index, search_start)
    } else {
        1
    }
}

fn flatten_json(
    value: &Value,
    prefix: String,
    content: &str,
    line_index: &[usize],
    result: &mut LocaleMessages,
) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_json(val, new_prefix, content, line_index, result);
            }
        }
        Value::String(s) => {
            let line = find_key_line(content, &prefix, line_index);
            result.entries.push(MessageContext::new(
                MessageLocation::with_line(result.file_path.clone(), line),
                prefix,
                s.clone(),
            ));
        }
        Value::Array(arr) if !prefix.is_empty() && !arr.is_empty() => {
            // String arrays are one message; anything else is addressed by index.
            if arr.iter().all(Value::is_string) {
                let values: Vec<&str> = arr.iter().filter_map(Value::as_str).collect();
                let line = find_key_line(content, &prefix, line_index);
                result.entries.push(MessageContext::new(
                    MessageLocation::with_line(result.file_path.clone(), line),
                    prefix,
                    values.join(", "),
                ));
            } else {
                for (index, val) in arr.iter().enumerate() {
                    flatten_json(
                        val,
                        format!("{}.{}", prefix, index),
                        content,
                        line_index,
                        result,
                    );
                }
            }
        }
        _ => {}
    }
}

/// Namespace of a locale file: its file stem (`locale/en/common.json` -> `common`).
pub fn extract_namespace(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Parse every `.json` file under `locale_root`, recursively.
///
/// A missing root is an error; unreadable or malformed files become warnings.
pub fn scan_locale_files(locale_root: impl AsRef<Path>) -> Result<ScanMessagesResult> {
    let locale_root = locale_root.as_ref();
    let mut result = ScanMessagesResult::default();

    if !locale_root.exists() {
        bail!(
            "Locale directory '{}' does not exist.\n\
             Hint: Check your .i18nscanrc.json 'localeRoot' setting or pass --locale-root.",
            locale_root.display()
        );
    }

    if !locale_root.is_dir() {
        bail!("'{}' is not a directory.", locale_root.display());
    }

    for entry in WalkDir::new(locale_root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                result.warnings.push(MessageScanWarning {
                    file_path: e
                        .path()
                        .map(|p| p.to_string_lossy().to_string())
                        .unwrap_or_default(),
                    error: e.to_string(),
                });
                continue;
            }
        };
        let path = entry.path();

        if entry.file_type().is_file()
            && path.extension().and_then(|e| e.to_str()) == Some("json")
            && let Some(namespace) = extract_namespace(path)
        {
            match parse_json_file(path, &namespace) {
                Ok(messages) => {
                    result
                        .messages
                        .insert(messages.file_path.clone(), messages);
                }
                Err(e) => {
                    result.warnings.push(MessageScanWarning {
                        file_path: path.to_string_lossy().to_string(),
                        error: format!("{:#}", e),
                    });
                }
            }
        }
    }

    Ok(result)
}
