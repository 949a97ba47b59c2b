use i18nscan::mcp::{I18nScanMcpServer, types::GetConfigParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = I18nScanMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["localeRoot"], "./locale");
    assert_eq!(json_result["config"]["i18nFunctionName"], "i18next.t");
    assert_eq!(json_result["config"]["i18nDetectPrefixNames"], json!(["i18next.t"]));
    assert_eq!(json_result["config"]["hasOpenAiApiKey"], false);
    assert!(json_result["config"]["includes"].is_array());
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "localeRoot": "i18n",
            "i18nDetectPrefixNames": "i18next.t, $t",
            "openAiApiKey": "sk-test"
        }))
        .unwrap();
    let server = I18nScanMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["localeRoot"], "i18n");
    assert_eq!(
        json_result["config"]["i18nDetectPrefixNames"],
        json!(["i18next.t", "$t"])
    );
    assert_eq!(json_result["config"]["hasOpenAiApiKey"], true);
    assert!(json_result["config"].get("openAiApiKey").is_none());
}

#[tokio::test]
async fn test_get_config_invalid_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "ignoredFunctions": ["[unclosed"] }))
        .unwrap();
    let server = I18nScanMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}
