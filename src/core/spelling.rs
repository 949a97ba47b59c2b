//! Spell-checking of locale values.
//!
//! Values are split into plain ASCII words (camelCase is split, anything
//! with digits or punctuation is skipped) and checked against a Hunspell
//! dictionary. `cspell.json` in the project root contributes `words`
//! (never reported, case-insensitive) and `flagWords` (always reported).

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use spellbook::Dictionary;

pub const CSPELL_FILE_NAME: &str = "cspell.json";

/// Anything that can tell whether a word is spelled correctly.
pub trait WordChecker {
    fn check(&self, word: &str) -> bool;
}

impl WordChecker for Dictionary {
    fn check(&self, word: &str) -> bool {
        Dictionary::check(self, word)
    }
}

/// Affix and word-list files for a dictionary path.
pub fn dictionary_files(base: &Path) -> (PathBuf, PathBuf) {
    if base.is_dir() {
        (base.join("index.aff"), base.join("index.dic"))
    } else {
        (base.with_extension("aff"), base.with_extension("dic"))
    }
}

pub fn load_dictionary(base: &Path) -> Result<Dictionary> {
    let (aff_path, dic_path) = dictionary_files(base);
    let aff = fs::read_to_string(&aff_path)
        .with_context(|| format!("Failed to read dictionary file: {}", aff_path.display()))?;
    let dic = fs::read_to_string(&dic_path)
        .with_context(|| format!("Failed to read dictionary file: {}", dic_path.display()))?;
    Dictionary::new(&aff, &dic)
        .map_err(|e| anyhow!("Failed to parse dictionary {}: {}", base.display(), e))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CspellFile {
    #[serde(default)]
    words: Vec<String>,
    #[serde(default)]
    flag_words: Vec<String>,
}

/// Project word lists from `cspell.json`.
#[derive(Debug, Clone, Default)]
pub struct WordLists {
    /// Lowercased.
    ignored: HashSet<String>,
    flagged: HashSet<String>,
}

impl WordLists {
    pub fn new<I, F>(words: I, flag_words: F) -> Self
    where
        I: IntoIterator<Item = String>,
        F: IntoIterator<Item = String>,
    {
        Self {
            ignored: words.into_iter().map(|w| w.to_lowercase()).collect(),
            flagged: flag_words.into_iter().collect(),
        }
    }

    /// Read `cspell.json` from `root`. A missing file gives empty lists.
    ///
    /// Lines starting with `//` are dropped before parsing.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CSPELL_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let json: String = content
            .lines()
            .filter(|line| !line.trim_start().starts_with("//"))
            .collect::<Vec<_>>()
            .join("\n");
        let file: CspellFile = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Self::new(file.words, file.flag_words))
    }

    pub fn is_ignored(&self, word: &str) -> bool {
        self.ignored.contains(&word.to_lowercase())
    }

    pub fn is_flagged(&self, word: &str) -> bool {
        self.flagged.contains(word)
    }
}

/// Words of a value worth checking, in order.
pub fn split_words(value: &str) -> Vec<&str> {
    value
        .split_whitespace()
        .flat_map(split_camel_case)
        .filter(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()))
        .collect()
}

fn split_camel_case(word: &str) -> Vec<&str> {
    let bytes = word.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0;
    for i in 1..bytes.len() {
        if bytes[i - 1].is_ascii_lowercase() && bytes[i].is_ascii_uppercase() {
            parts.push(&word[start..i]);
            start = i;
        }
    }
    parts.push(&word[start..]);
    parts
}

/// Misspelled or flagged words of `value`. ALL-CAPS words are skipped.
pub fn misspelled_words<'a>(
    value: &'a str,
    checker: &dyn WordChecker,
    lists: &WordLists,
) -> Vec<&'a str> {
    split_words(value)
        .into_iter()
        .filter(|word| !word.chars().all(|c| c.is_ascii_uppercase()))
        .filter(|word| !lists.is_ignored(word))
        .filter(|word| lists.is_flagged(word) || !checker.check(word))
        .collect()
}
