use std::{fmt, path::Path};

use serde::Serialize;

/// Source file kind, derived from the file extension.
///
/// Drives which classifier rules apply: Handlebars and HTML have their own
/// i18n directive exemptions, and only markup-bearing kinds get the
/// tag-text / template-literal pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Js,
    Jsx,
    Ts,
    Tsx,
    Html,
    Vue,
    Handlebars,
    Other,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "js" | "mjs" | "cjs" => FileType::Js,
            "jsx" => FileType::Jsx,
            "ts" | "mts" | "cts" => FileType::Ts,
            "tsx" => FileType::Tsx,
            "html" | "htm" => FileType::Html,
            "vue" => FileType::Vue,
            "hbs" | "handlebars" => FileType::Handlebars,
            _ => FileType::Other,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(Self::from_extension)
            .unwrap_or(FileType::Other)
    }

    /// Whether the whole-file tag-text and template-literal pass applies.
    pub fn has_markup(self) -> bool {
        matches!(
            self,
            FileType::Js
                | FileType::Jsx
                | FileType::Ts
                | FileType::Tsx
                | FileType::Html
                | FileType::Vue
        )
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileType::Js => "js",
            FileType::Jsx => "jsx",
            FileType::Ts => "ts",
            FileType::Tsx => "tsx",
            FileType::Html => "html",
            FileType::Vue => "vue",
            FileType::Handlebars => "handlebars",
            FileType::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// A piece of text the scanner judged to need translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    /// String contents without quotes, or trimmed tag-inner text.
    pub text: String,
    /// Byte offset into the file of the opening quote (or first text character).
    pub index: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, in characters, of `index` on its line.
    pub col: usize,
    pub current_line_text: String,
    pub previous_line_text: Option<String>,
    pub next_line_text: Option<String>,
}

/// How an occurrence was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DetectionSource {
    /// Found by the heuristic scanner only ("possible").
    #[default]
    Heuristic,
    /// Corroborated by the AI review.
    AiConfirmed,
}

impl fmt::Display for DetectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectionSource::Heuristic => write!(f, "possible"),
            DetectionSource::AiConfirmed => write!(f, "AI-confirmed"),
        }
    }
}
