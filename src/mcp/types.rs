use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root (where .i18nscanrc.json lives)
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanUnlocalizedParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// File or directory to scan, relative to the project root (default: whole project)
    pub path: Option<String>,
    /// Maximum number of items to return (default 20, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip (default 0)
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanUnusedKeysParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Maximum number of items to return (default 20, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip (default 0)
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractKeysParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// File or directory to read keys from, relative to the project root (default: whole project)
    pub path: Option<String>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

/// Configuration values relevant to an agent. The API key is never exposed.
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub scan_file_extensions: Vec<String>,
    pub ignore_texts: Vec<String>,
    pub i18n_function_name: String,
    pub i18n_detect_prefix_names: Vec<String>,
    pub locale_root: String,
    pub locale_path: String,
    pub gpt_model: String,
    pub has_open_ai_api_key: bool,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            i18n_detect_prefix_names: c.detect_prefix_names(),
            has_open_ai_api_key: !c.open_ai_api_key.trim().is_empty(),
            includes: c.includes,
            ignores: c.ignores,
            scan_file_extensions: c.scan_file_extensions,
            ignore_texts: c.ignore_texts,
            i18n_function_name: c.i18n_function_name,
            locale_root: c.locale_root,
            locale_path: c.locale_path,
            gpt_model: c.gpt_model,
        }
    }
}

// ============================================================
// Unlocalized Scan Types (scan_unlocalized)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnlocalizedScanResult {
    pub total_count: usize,
    pub total_file_count: usize,
    pub items: Vec<UnlocalizedItem>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnlocalizedItem {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
    pub text: String,
    pub source_line: String,
}

// ============================================================
// Unused Keys Types (scan_unused_keys)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnusedKeysScanResult {
    pub total_count: usize,
    pub items: Vec<UnusedKeyItem>,
    /// Locale files that could not be read or parsed
    pub parse_errors: Vec<ParseErrorItem>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnusedKeyItem {
    /// Key as code would reference it, namespace included
    pub key: String,
    pub value: String,
    pub file_path: String,
    pub line: usize,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParseErrorItem {
    pub file_path: String,
    pub error: String,
}

// ============================================================
// Used Keys Types (extract_keys)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UsedKeysResult {
    pub total_count: usize,
    /// Keys as written in code; `*` marks a dynamic segment
    pub keys: Vec<String>,
}

// ============================================================
// Shared Types
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

impl Pagination {
    /// Slice `items` to one page.
    pub fn page<T>(items: Vec<T>, offset: usize, limit: usize) -> (Vec<T>, Self) {
        let total = items.len();
        let page: Vec<T> = items.into_iter().skip(offset).take(limit).collect();
        let has_more = offset + page.len() < total;
        (
            page,
            Self {
                offset,
                limit,
                has_more,
            },
        )
    }
}
