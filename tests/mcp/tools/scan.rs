use std::fs;

use i18nscan::mcp::{
    I18nScanMcpServer,
    types::{ScanUnlocalizedParams, ScanUnusedKeysParams},
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, assert_pagination, extract_tool_result_json, fixture_with_texts};

// ============================================================================
// scan_unlocalized tests
// ============================================================================

fn unlocalized_params(
    fixture: &McpTestFixture,
    path: Option<&str>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> Parameters<ScanUnlocalizedParams> {
    Parameters(ScanUnlocalizedParams {
        project_root_path: fixture.root(),
        path: path.map(String::from),
        limit,
        offset,
    })
}

#[tokio::test]
async fn test_scan_unlocalized_items() {
    let fixture = fixture_with_texts(3).unwrap();
    let server = I18nScanMcpServer::new();

    let result = server
        .scan_unlocalized(unlocalized_params(&fixture, None, None, None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 3);
    assert_eq!(json_result["totalFileCount"], 3);

    let item = &json_result["items"][0];
    assert_eq!(item["filePath"], "src/page00.js");
    assert_eq!(item["line"], 1);
    assert_eq!(item["col"], 15);
    assert_eq!(item["text"], "Welcome to page 0");
    assert_eq!(item["sourceLine"], "const title = 'Welcome to page 0';");

    assert_pagination(&json_result, 0, 20, false);
}

#[tokio::test]
async fn test_scan_unlocalized_pagination() {
    let fixture = fixture_with_texts(25).unwrap();
    let server = I18nScanMcpServer::new();

    let first = server
        .scan_unlocalized(unlocalized_params(&fixture, None, None, None))
        .await
        .unwrap();
    let first = extract_tool_result_json(&first);
    assert_eq!(first["totalCount"], 25);
    assert_eq!(first["items"].as_array().unwrap().len(), 20);
    assert_pagination(&first, 0, 20, true);

    let second = server
        .scan_unlocalized(unlocalized_params(&fixture, None, None, Some(20)))
        .await
        .unwrap();
    let second = extract_tool_result_json(&second);
    assert_eq!(second["items"].as_array().unwrap().len(), 5);
    assert_eq!(second["items"][0]["filePath"], "src/page20.js");
    assert_pagination(&second, 20, 20, false);
}

#[tokio::test]
async fn test_scan_unlocalized_limit_is_capped() {
    let fixture = fixture_with_texts(2).unwrap();
    let server = I18nScanMcpServer::new();

    let result = server
        .scan_unlocalized(unlocalized_params(&fixture, None, Some(500), None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_pagination(&json_result, 0, 100, false);
}

#[tokio::test]
async fn test_scan_unlocalized_single_path() {
    let fixture = fixture_with_texts(3).unwrap();
    let server = I18nScanMcpServer::new();

    let result = server
        .scan_unlocalized(unlocalized_params(&fixture, Some("src/page01.js"), None, None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 1);
    assert_eq!(json_result["items"][0]["text"], "Welcome to page 1");
}

#[tokio::test]
async fn test_scan_unlocalized_missing_path() {
    let fixture = McpTestFixture::new().unwrap();
    let server = I18nScanMcpServer::new();

    let result = server
        .scan_unlocalized(unlocalized_params(&fixture, Some("src/nope.js"), None, None))
        .await;

    assert!(result.is_err());
}

// ============================================================================
// scan_unused_keys tests
// ============================================================================

fn unused_params(fixture: &McpTestFixture) -> Parameters<ScanUnusedKeysParams> {
    Parameters(ScanUnusedKeysParams {
        project_root_path: fixture.root(),
        limit: None,
        offset: None,
    })
}

#[tokio::test]
async fn test_scan_unused_keys() {
    let fixture = McpTestFixture::with_locales(vec![(
        "default",
        json!({"save": "Save", "cancel": "Cancel", "menu": {"open": "Open"}}),
    )])
    .unwrap();
    fixture
        .write_source_file(
            "src/toolbar.js",
            "i18next.t('default.save');\ni18next.t(`default.menu.${item}`);\n",
        )
        .unwrap();
    let server = I18nScanMcpServer::new();

    let result = server.scan_unused_keys(unused_params(&fixture)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 1);
    let item = &json_result["items"][0];
    assert_eq!(item["key"], "default.cancel");
    assert_eq!(item["value"], "Cancel");
    assert_eq!(item["filePath"], "locale/default.json");
    assert_eq!(item["line"], 3);
    assert!(json_result["parseErrors"].as_array().unwrap().is_empty());
    assert_pagination(&json_result, 0, 20, false);
}

#[tokio::test]
async fn test_scan_unused_keys_reports_parse_errors() {
    let fixture =
        McpTestFixture::with_locales(vec![("default", json!({"save": "Save"}))]).unwrap();
    fs::write(fixture.root_path().join("locale/broken.json"), "{ \"a\": ").unwrap();
    fixture
        .write_source_file("src/app.js", "i18next.t('default.save');\n")
        .unwrap();
    let server = I18nScanMcpServer::new();

    let result = server.scan_unused_keys(unused_params(&fixture)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 0);
    let errors = json_result["parseErrors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["filePath"], "locale/broken.json");
}

#[tokio::test]
async fn test_scan_unused_keys_missing_locale_dir() {
    let fixture = McpTestFixture::new().unwrap();
    fs::remove_dir_all(fixture.root_path().join("locale")).unwrap();
    let server = I18nScanMcpServer::new();

    let result = server.scan_unused_keys(unused_params(&fixture)).await;

    assert!(result.is_err());
}
