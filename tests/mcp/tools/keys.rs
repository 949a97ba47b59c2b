use i18nscan::mcp::{I18nScanMcpServer, types::ExtractKeysParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// extract_keys tests
// ============================================================================

#[tokio::test]
async fn test_extract_keys() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_source_file(
            "src/toolbar.js",
            "i18next.t('default.save');\nconst label = i18next.t(`status.${code}`);\n",
        )
        .unwrap();
    fixture
        .write_source_file("src/nav.html", "<a data-i18n=\"nav.home\"></a>\n")
        .unwrap();
    let server = I18nScanMcpServer::new();

    let params = Parameters(ExtractKeysParams {
        project_root_path: fixture.root(),
        path: None,
    });

    let result = server.extract_keys(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 3);
    assert_eq!(
        json_result["keys"],
        json!(["default.save", "nav.home", "status.*"])
    );
}

#[tokio::test]
async fn test_extract_keys_for_directory() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_source_file("src/admin/users.js", "i18next.t('admin.users');\n")
        .unwrap();
    fixture
        .write_source_file("src/shop/cart.js", "i18next.t('shop.cart');\n")
        .unwrap();
    let server = I18nScanMcpServer::new();

    let params = Parameters(ExtractKeysParams {
        project_root_path: fixture.root(),
        path: Some("src/shop".to_string()),
    });

    let result = server.extract_keys(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["keys"], json!(["shop.cart"]));
}
