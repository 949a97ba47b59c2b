use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".i18nscanrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directories (relative to the project root) to scan. Empty means the whole root.
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_scan_file_extensions")]
    pub scan_file_extensions: Vec<String>,
    #[serde(default = "default_scan_skip_file_extensions")]
    pub scan_skip_file_extensions: Vec<String>,
    #[serde(default = "default_scan_skip_folders")]
    pub scan_skip_folders: Vec<String>,
    /// Attribute/property names whose values are never UI text. Regex fragments.
    #[serde(default = "default_ignored_props")]
    pub ignored_props: Vec<String>,
    /// Value prefixes (CSS utilities, theme helpers). Regex fragments.
    #[serde(default = "default_ignored_value_prefixes")]
    pub ignored_value_prefixes: Vec<String>,
    /// Functions whose direct string arguments are never UI text. Regex fragments.
    #[serde(default = "default_ignored_functions")]
    pub ignored_functions: Vec<String>,
    #[serde(default)]
    pub ignore_texts: Vec<String>,
    #[serde(default = "default_i18n_function_name")]
    pub i18n_function_name: String,
    /// Comma-separated list of translation call names, e.g. `"i18next.t, t"`.
    #[serde(default = "default_i18n_function_name")]
    pub i18n_detect_prefix_names: String,
    #[serde(default = "default_true")]
    pub ignore_camel_case: bool,
    #[serde(default = "default_true")]
    pub ignore_snake_case: bool,
    #[serde(default = "default_true")]
    pub ignore_dot_expression: bool,
    #[serde(default, alias = "ignoreHTMLText")]
    pub ignore_html_text: bool,
    #[serde(default = "default_locale_root", alias = "localeResourceFolder")]
    pub locale_root: String,
    /// Locale file that `extract` writes new keys into.
    #[serde(default)]
    pub locale_path: String,
    #[serde(default = "default_open_ai_base_path", alias = "openAIBasePath")]
    pub open_ai_base_path: String,
    #[serde(default, alias = "openAIApiKey", skip_serializing_if = "String::is_empty")]
    pub open_ai_api_key: String,
    #[serde(default = "default_gpt_model")]
    pub gpt_model: String,
    #[serde(default = "default_max_request_size")]
    pub max_request_size: usize,
    #[serde(default)]
    pub unlocalized_text_prompt: String,
    #[serde(default)]
    pub chat_template: String,
    /// Hunspell dictionary used by `typos`: a path without extension
    /// (`<path>.aff` + `<path>.dic`), or a directory holding `index.aff`
    /// and `index.dic`.
    #[serde(default = "default_typo_dictionary")]
    pub typo_dictionary: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_scan_file_extensions() -> Vec<String> {
    strings(&[
        "js",
        "jsx",
        "html",
        "htm",
        "vue",
        "mjs",
        "cjs",
        "ts",
        "tsx",
        "handlebars",
        "hbs",
    ])
}

fn default_scan_skip_file_extensions() -> Vec<String> {
    ["story", "stories", "test", "spec"]
        .iter()
        .flat_map(|kind| {
            ["js", "jsx", "ts", "tsx"]
                .iter()
                .map(move |ext| format!("{}.{}", kind, ext))
        })
        .collect()
}

fn default_scan_skip_folders() -> Vec<String> {
    strings(&[
        "node_modules",
        "dist",
        "build",
        "public",
        "static",
        "assets",
        "images",
        "__tests__",
        "__snapshots__",
        "coverage",
        "__mocks__",
    ])
}

fn default_ignored_props() -> Vec<String> {
    strings(&[
        "style",
        "width",
        "minWidth",
        "maxWidth",
        "height",
        "minHeight",
        "maxHeight",
        "id",
        "src",
        "alt",
        "href",
        "d",
        "transform",
        "xmlns",
        "fill",
        "type",
        "prop",
        "className",
        "class",
        "size",
        "useState",
    ])
}

fn default_ignored_value_prefixes() -> Vec<String> {
    strings(&[
        "bg-", "btn-", "text-", "border-", "p-", "m-", "flex", "grid", "col-", "row-", "sm:",
        "md:", "lg:", "xl:", "2xl:", r"var\(--", r"theme\(", "i18n:",
    ])
}

fn default_ignored_functions() -> Vec<String> {
    strings(&[
        "classNames",
        "cn",
        "clsx",
        "useState",
        "log",
        r"log\.error",
        r"log\.warn",
        r"log\.info",
        r"log\.debug",
        r"log\.dev\.error",
        r"log\.dev\.warn",
        r"log\.dev\.info",
        r"log\.dev\.debug",
        r"console\.log",
        r"console\.error",
        r"console\.warn",
        r"console\.info",
        r"console\.debug",
        "notify",
        "find",
        "css",
        r"\.on",
        r"\.off",
    ])
}

fn default_i18n_function_name() -> String {
    "i18next.t".to_string()
}

fn default_true() -> bool {
    true
}

fn default_locale_root() -> String {
    "./locale".to_string()
}

fn default_open_ai_base_path() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_gpt_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_max_request_size() -> usize {
    20000
}

fn default_typo_dictionary() -> String {
    "/usr/share/hunspell/en_US".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: Vec::new(),
            ignores: Vec::new(),
            scan_file_extensions: default_scan_file_extensions(),
            scan_skip_file_extensions: default_scan_skip_file_extensions(),
            scan_skip_folders: default_scan_skip_folders(),
            ignored_props: default_ignored_props(),
            ignored_value_prefixes: default_ignored_value_prefixes(),
            ignored_functions: default_ignored_functions(),
            ignore_texts: Vec::new(),
            i18n_function_name: default_i18n_function_name(),
            i18n_detect_prefix_names: default_i18n_function_name(),
            ignore_camel_case: true,
            ignore_snake_case: true,
            ignore_dot_expression: true,
            ignore_html_text: false,
            locale_root: default_locale_root(),
            locale_path: String::new(),
            open_ai_base_path: default_open_ai_base_path(),
            open_ai_api_key: String::new(),
            gpt_model: default_gpt_model(),
            max_request_size: default_max_request_size(),
            unlocalized_text_prompt: String::new(),
            chat_template: String::new(),
            typo_dictionary: default_typo_dictionary(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects invalid glob patterns, regex fragments that do not compile, an
    /// empty list of translation call names and a zero request size.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        for (field, fragments) in [
            ("ignoredProps", &self.ignored_props),
            ("ignoredValuePrefixes", &self.ignored_value_prefixes),
            ("ignoredFunctions", &self.ignored_functions),
        ] {
            for fragment in fragments {
                Regex::new(&format!("(?:{})", fragment)).with_context(|| {
                    format!("Invalid regex fragment in '{}': \"{}\"", field, fragment)
                })?;
            }
        }

        if self.detect_prefix_names().is_empty() {
            bail!("'i18nDetectPrefixNames' must name at least one translation function");
        }

        if self.max_request_size == 0 {
            bail!("'maxRequestSize' must be greater than 0");
        }

        Ok(())
    }

    /// Translation call names from `i18nDetectPrefixNames`, trimmed, empty entries dropped.
    pub fn detect_prefix_names(&self) -> Vec<String> {
        self.i18n_detect_prefix_names
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
