/// Position information in locale resource files (JSON).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageLocation {
    /// Path to the locale file (e.g., "./locale/default.json").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }

    /// Create with default column (1).
    pub fn with_line(file_path: impl Into<String>, line: usize) -> Self {
        Self::new(file_path, line, 1)
    }
}

/// A translation entry together with where it was declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub location: MessageLocation,
    /// Flattened key inside its file (e.g., "severity.outage").
    pub key: String,
    /// The translation value.
    pub value: String,
}

impl MessageContext {
    pub fn new(
        location: MessageLocation,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            location,
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}

/// All string leaves of one locale resource file, in file order.
///
/// The file stem is the namespace: a leaf `severity.outage` in `default.json`
/// is referenced from code as `default.severity.outage`.
#[derive(Debug, Clone)]
pub struct LocaleMessages {
    pub namespace: String,
    pub file_path: String,
    pub entries: Vec<MessageContext>,
}

/// Locale files keyed by file path.
pub type AllLocaleMessages = std::collections::BTreeMap<String, LocaleMessages>;

impl LocaleMessages {
    pub fn new(namespace: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            file_path: file_path.into(),
            entries: Vec::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&MessageContext> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// First key whose value is exactly `value`.
    pub fn find_by_value(&self, value: &str) -> Option<&MessageContext> {
        self.entries.iter().find(|entry| entry.value == value)
    }

    /// Key as referenced from source code: `<namespace>.<key>`.
    pub fn qualified_key(&self, key: &str) -> String {
        if self.namespace.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.namespace, key)
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
