//! Moving a hardcoded text into a locale file.
//!
//! 1. Pick the text: given explicitly, the sentence at a column, or the
//!    first unlocalized text the scanner finds on the line
//! 2. Reuse a key holding the same text, or add a new key (explicit,
//!    AI-suggested, or generated from the text)
//! 3. Replace the text on its line with a translation call
//!
//! Nothing is written unless the request says `apply`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use super::{
    replace::{build_replacement, replace_in_line, sanitize_key, sentence_at, slug_key, unquote},
    reuse::{ReuseStrategy, find_reusable_key},
    writer::{InsertOutcome, LocaleWriter},
};
use crate::{
    ai::KeySuggester,
    config::Config,
    core::{
        FileType, LocaleMessages,
        parsers::json::{extract_namespace, parse_json_file},
        scan::{ScanRules, scan_for_unlocalized_text},
    },
};

#[derive(Debug, Clone)]
pub struct ExtractRequest<'a> {
    pub file: &'a Path,
    /// 1-based line.
    pub line: usize,
    /// 1-based character column, used to pick the sentence under it.
    pub col: Option<usize>,
    pub text: Option<&'a str>,
    pub key: Option<&'a str>,
    pub apply: bool,
}

impl Default for ExtractRequest<'_> {
    fn default() -> Self {
        Self {
            file: Path::new(""),
            line: 1,
            col: None,
            text: None,
            key: None,
            apply: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOutcome {
    pub text: String,
    /// Key inside the locale file.
    pub key: String,
    /// Key as referenced from code, namespace included.
    pub qualified_key: String,
    pub reused: bool,
    pub locale_file: PathBuf,
    /// `None` when an existing key was reused.
    pub locale_change: Option<InsertOutcome>,
    pub source_file: PathBuf,
    pub line: usize,
    pub before: String,
    pub after: String,
    pub applied: bool,
}

pub struct Extractor<'a> {
    pub config: &'a Config,
    pub rules: &'a ScanRules,
    pub locale_file: &'a Path,
    pub reuse: &'a dyn ReuseStrategy,
    pub suggester: Option<&'a dyn KeySuggester>,
}

impl Extractor<'_> {
    pub fn extract(&self, request: &ExtractRequest) -> Result<ExtractOutcome> {
        let code = fs::read_to_string(request.file)
            .with_context(|| format!("Failed to read file: {}", request.file.display()))?;
        let lines: Vec<&str> = code.split('\n').collect();
        let Some(line_text) = request
            .line
            .checked_sub(1)
            .and_then(|i| lines.get(i))
            .copied()
        else {
            bail!(
                "Line {} is out of range ({} has {} lines)",
                request.line,
                request.file.display(),
                lines.len()
            );
        };

        let text = self.pick_text(request, &code, line_text)?;

        let namespace = extract_namespace(self.locale_file).unwrap_or_default();
        let mut writer = LocaleWriter::open_or_create(self.locale_file)?;
        let messages = if self.locale_file.exists() {
            parse_json_file(self.locale_file, &namespace)?
        } else {
            LocaleMessages::new(namespace.as_str(), self.locale_file.to_string_lossy())
        };

        let (key, locale_change) = match find_reusable_key(&messages, &text, self.reuse) {
            Some(existing) => (existing.key.clone(), None),
            None => {
                let key = self.new_key(request, &text);
                let change = writer.insert_message(&key, &text)?;
                (key, Some(change))
            }
        };

        let replacement = build_replacement(&self.config.i18n_function_name, &namespace, &key);
        let Some(after) = replace_in_line(line_text, &text, &replacement) else {
            bail!("Text \"{}\" not found on line {}", text, request.line);
        };

        if request.apply {
            if locale_change == Some(InsertOutcome::Added) {
                writer.save()?;
            }
            let mut new_lines = lines.clone();
            new_lines[request.line - 1] = &after;
            fs::write(request.file, new_lines.join("\n"))
                .with_context(|| format!("Failed to write file: {}", request.file.display()))?;
        }

        Ok(ExtractOutcome {
            qualified_key: messages.qualified_key(&key),
            text,
            key,
            reused: locale_change.is_none(),
            locale_file: self.locale_file.to_path_buf(),
            locale_change,
            source_file: request.file.to_path_buf(),
            line: request.line,
            before: line_text.to_string(),
            after,
            applied: request.apply,
        })
    }

    fn pick_text(&self, request: &ExtractRequest, code: &str, line_text: &str) -> Result<String> {
        let text = if let Some(text) = request.text {
            unquote(text).to_string()
        } else if let Some(col) = request.col {
            match sentence_at(line_text, col) {
                Some((start, end)) => line_text[start..end].to_string(),
                None => bail!("No sentence found at {}:{}", request.line, col),
            }
        } else {
            let file_type = FileType::from_path(request.file);
            match scan_for_unlocalized_text(code, file_type, self.rules)
                .into_iter()
                .find(|o| o.line == request.line)
            {
                Some(occurrence) => occurrence.text,
                None => bail!("No unlocalized text found on line {}", request.line),
            }
        };

        if text.trim().is_empty() {
            bail!("Nothing to extract on line {}", request.line);
        }
        Ok(text)
    }

    fn new_key(&self, request: &ExtractRequest, text: &str) -> String {
        if let Some(key) = request.key {
            return sanitize_key(key, text);
        }
        match self.suggester.map(|s| s.suggest_key(text)) {
            Some(Ok(suggested)) => sanitize_key(&suggested, text),
            Some(Err(e)) => {
                eprintln!(
                    "{} key suggestion failed, using a generated key: {:#}",
                    "warning:".bold().yellow(),
                    e
                );
                slug_key(text)
            }
            None => slug_key(text),
        }
    }
}
