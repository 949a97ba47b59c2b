use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    cli::args::CommonArgs,
    config::load_config,
    core::context::ScanContext,
    rules::{unlocalized::check_unlocalized_text_issues, unused::check_unused_keys_issues},
};

use super::types::{
    ConfigDto, ConfigValues, ExtractKeysParams, GetConfigParams, Pagination, ParseErrorItem,
    ScanUnlocalizedParams, ScanUnusedKeysParams, UnlocalizedItem, UnlocalizedScanResult,
    UnusedKeyItem, UnusedKeysScanResult, UsedKeysResult,
};

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 100;

#[derive(Clone)]
pub struct I18nScanMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for I18nScanMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl I18nScanMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Scan source files for hardcoded user-facing text that should be wrapped in a translation call. Returns paginated list of findings."
    )]
    pub async fn scan_unlocalized(
        &self,
        params: Parameters<ScanUnlocalizedParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let (offset, limit) = page_bounds(params.offset, params.limit);
        let ctx = open_context(&params.project_root_path, params.path.as_deref())?;

        let mut all_items: Vec<UnlocalizedItem> =
            check_unlocalized_text_issues(&ctx, &BTreeSet::new())
                .into_iter()
                .map(|issue| UnlocalizedItem {
                    file_path: relative_to(&ctx.root_dir, issue.context.file_path()),
                    line: issue.context.line(),
                    col: issue.context.col(),
                    text: issue.text,
                    source_line: issue.context.source_line.trim().to_string(),
                })
                .collect();
        all_items.sort_by(|a, b| {
            a.file_path
                .cmp(&b.file_path)
                .then(a.line.cmp(&b.line))
                .then(a.col.cmp(&b.col))
        });

        let total_count = all_items.len();
        let total_file_count = all_items
            .iter()
            .map(|item| item.file_path.as_str())
            .collect::<HashSet<_>>()
            .len();
        let (items, pagination) = Pagination::page(all_items, offset, limit);

        to_json_result(&UnlocalizedScanResult {
            total_count,
            total_file_count,
            items,
            pagination,
        })
    }

    #[tool(
        description = "Find translation keys declared in locale files that no source file references. Wildcard usages (e.g. `menu.*`) count as references. Returns paginated list."
    )]
    pub async fn scan_unused_keys(
        &self,
        params: Parameters<ScanUnusedKeysParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let (offset, limit) = page_bounds(params.offset, params.limit);
        let ctx = open_context(&params.project_root_path, None)?;

        let issues = check_unused_keys_issues(&ctx)
            .map_err(|e| McpError::internal_error(format!("Scan failed: {:#}", e), None))?;

        let all_items: Vec<UnusedKeyItem> = issues
            .into_iter()
            .map(|issue| UnusedKeyItem {
                file_path: relative_to(&ctx.root_dir, issue.context.file_path()),
                line: issue.context.line(),
                key: issue.qualified_key,
                value: issue.context.value,
            })
            .collect();
        let parse_errors = ctx
            .message_parse_errors()
            .into_iter()
            .map(|e| ParseErrorItem {
                file_path: relative_to(&ctx.root_dir, &e.file_path),
                error: e.error,
            })
            .collect();

        let total_count = all_items.len();
        let (items, pagination) = Pagination::page(all_items, offset, limit);

        to_json_result(&UnusedKeysScanResult {
            total_count,
            items,
            parse_errors,
            pagination,
        })
    }

    #[tool(
        description = "List the translation keys referenced from source code. Dynamic segments appear as `*`."
    )]
    pub async fn extract_keys(
        &self,
        params: Parameters<ExtractKeysParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let ctx = open_context(&params.project_root_path, params.path.as_deref())?;

        let keys: Vec<String> = ctx.used_keys().iter().cloned().collect();

        to_json_result(&UsedKeysResult {
            total_count: keys.len(),
            keys,
        })
    }

    #[tool(description = "Get the current i18nscan configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        to_json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }
}

#[tool_handler]
impl ServerHandler for I18nScanMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "i18nscan MCP helps AI agents find text that still needs translation.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration (translation function, locale folder)\n\
                 2. scan_unlocalized - Get hardcoded user-facing text (paginated)\n\
                 3. extract_keys - Get translation keys referenced from code\n\
                 4. scan_unused_keys - Get locale keys no code references (paginated)\n\n\
                 Recommended Workflow:\n\
                 1. Use get_config to learn the translation function name\n\
                 2. Use scan_unlocalized and replace each text with a translation call\n\
                 3. Add the new keys to the locale file\n\
                 4. Use scan_unused_keys to find keys that can be removed\n\n\
                 Findings are heuristic: skip texts that are clearly not shown to users."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = I18nScanMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}

fn page_bounds(offset: Option<u32>, limit: Option<u32>) -> (usize, usize) {
    let limit = limit
        .map(|v| v as usize)
        .unwrap_or(DEFAULT_LIMIT)
        .min(MAX_LIMIT);
    let offset = offset.map(|v| v as usize).unwrap_or(0);
    (offset, limit)
}

fn open_context(project_root: &str, path: Option<&str>) -> Result<ScanContext, McpError> {
    let common = CommonArgs {
        source_root: Some(PathBuf::from(project_root)),
        locale_root: None,
        verbose: false,
    };
    let target = path.map(Path::new);
    ScanContext::new(&common, target)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))
}

/// `file_path` relative to the project root when it lies inside it.
fn relative_to(root: &Path, file_path: &str) -> String {
    Path::new(file_path)
        .strip_prefix(root)
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|_| file_path.to_string())
}

fn to_json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}
