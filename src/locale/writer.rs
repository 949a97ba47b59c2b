//! Locale file editing.
//!
//! Dotted keys are stored nested (`severity.outage` lives under
//! `"severity": { "outage": ... }`) and existing key order is preserved.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Added,
    /// The key already held the same value.
    Unchanged,
}

impl InsertOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            InsertOutcome::Added => "added",
            InsertOutcome::Unchanged => "unchanged",
        }
    }
}

#[derive(Debug)]
pub struct LocaleWriter {
    file_path: PathBuf,
    root: Map<String, Value>,
}

impl LocaleWriter {
    /// Open a locale file, or start an empty one if it does not exist yet.
    pub fn open_or_create(path: &Path) -> Result<Self> {
        let root = if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            if content.trim().is_empty() {
                Map::new()
            } else {
                match serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse JSON: {}", path.display()))?
                {
                    Value::Object(map) => map,
                    _ => bail!("Locale file {} is not a JSON object", path.display()),
                }
            }
        } else {
            Map::new()
        };

        Ok(Self {
            file_path: path.to_path_buf(),
            root,
        })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Insert `key` with `value`.
    ///
    /// Inserting the value a key already holds is a no-op. A key taken by a
    /// different value, or a path running through a non-object, is an error
    /// and leaves the file untouched.
    pub fn insert_message(&mut self, key: &str, value: &str) -> Result<InsertOutcome> {
        let parts: Vec<&str> = key.split('.').collect();
        if parts.iter().any(|p| p.is_empty()) {
            bail!("Invalid key '{}'", key);
        }
        let Some((last, parents)) = parts.split_last() else {
            bail!("Invalid key '{}'", key);
        };

        if let Some(existing) = self.lookup(key) {
            return match existing {
                Value::String(s) if s == value => Ok(InsertOutcome::Unchanged),
                Value::String(s) => bail!("Key '{}' is already taken by \"{}\"", key, s),
                _ => bail!("Key '{}' is already used as a group of keys", key),
            };
        }

        // A leaf on the path is found before anything new is created.
        let mut current = &mut self.root;
        for (depth, part) in parents.iter().enumerate() {
            let entry = current
                .entry(part.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            current = match entry {
                Value::Object(map) => map,
                _ => bail!(
                    "Key '{}' conflicts with the existing value at '{}'",
                    key,
                    parts[..=depth].join(".")
                ),
            };
        }
        current.insert(last.to_string(), Value::String(value.to_string()));
        Ok(InsertOutcome::Added)
    }

    /// Value at a dotted key, if any.
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        let mut parts = key.split('.');
        let first = parts.next()?;
        parts.try_fold(self.root.get(first)?, |value, part| value.get(part))
    }

    pub fn to_json_string(&self) -> Result<String> {
        let mut content =
            serde_json::to_string_pretty(&self.root).context("Failed to serialize JSON")?;
        content.push('\n');
        Ok(content)
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&self.file_path, self.to_json_string()?)
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;
        Ok(())
    }
}
