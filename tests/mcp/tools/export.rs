use varport::mcp::{VarportMcpServer, types::ExportTokensParams};
use pretty_assertions::assert_eq;
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json, theme_snapshot, tool_result_text};

fn params(fixture: &McpTestFixture, mode: &str, format: Option<&str>) -> ExportTokensParams {
    ExportTokensParams {
        project_root_path: fixture.root(),
        snapshot_path: None,
        collection: "Theme".to_string(),
        mode: mode.to_string(),
        format: format.map(str::to_string),
        value_format: None,
        structure_mode: None,
        value_mode: None,
    }
}

// ============================================================================
// export_tokens tests
// ============================================================================

#[tokio::test]
async fn test_export_css_by_default() {
    let fixture = McpTestFixture::with_snapshot(&theme_snapshot()).unwrap();
    let server = VarportMcpServer::new();

    let result = server
        .export_tokens(Parameters(params(&fixture, "Light", None)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["format"], "cssVar");
    assert_eq!(json_result["tokenCount"], 3);
    assert_eq!(json_result["notice"], "Exported 3 tokens.");
    assert_eq!(
        json_result["content"],
        ":root {\n  --spacing-small: 4;\n  --color-link: '#0000FF';\n  --color-accent: '#0000FF';\n}"
    );
    assert_eq!(json_result["skipped"], json!([]));
}

#[tokio::test]
async fn test_export_dot_notation_alias_names() {
    let fixture = McpTestFixture::with_snapshot(&theme_snapshot()).unwrap();
    let server = VarportMcpServer::new();

    let mut request = params(&fixture, "Dark", Some("dotNotation"));
    request.value_format = Some("aliasName".to_string());

    let result = server.export_tokens(Parameters(request)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(
        json_result["document"],
        json!({
            "spacing": {"small": "4"},
            "color": {"link": "blue.500", "accent": "#00FFFF"}
        })
    );
    assert_eq!(json_result["tokenCount"], 3);
}

#[tokio::test]
async fn test_export_collection_by_id() {
    let fixture = McpTestFixture::with_snapshot(&theme_snapshot()).unwrap();
    let server = VarportMcpServer::new();

    let mut request = params(&fixture, "Light", Some("camelCase"));
    request.collection = "VariableCollectionId:2:0".to_string();

    let result = server.export_tokens(Parameters(request)).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(
        json_result["document"],
        json!({"spacingSmall": 4, "colorLink": "#0000FF", "colorAccent": "#0000FF"})
    );
}

#[tokio::test]
async fn test_export_minimized_set() {
    let fixture = McpTestFixture::with_snapshot(&theme_snapshot()).unwrap();
    let server = VarportMcpServer::new();

    let mut request = params(&fixture, "Light", Some("minimizedSet"));
    request.structure_mode = Some("Light".to_string());
    request.value_mode = Some("Dark".to_string());

    let result = server.export_tokens(Parameters(request)).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(
        json_result["document"]["--color-accent"],
        json!("#00FFFF")
    );
    assert_eq!(json_result["tokenCount"], 3);
}

#[tokio::test]
async fn test_unknown_format_is_reported() {
    let fixture = McpTestFixture::with_snapshot(&theme_snapshot()).unwrap();
    let server = VarportMcpServer::new();

    let result = server
        .export_tokens(Parameters(params(&fixture, "Light", Some("yaml"))))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(true));
    assert_eq!(tool_result_text(&result), "Unknown export format: yaml");
}

#[tokio::test]
async fn test_missing_selection_is_reported() {
    let fixture = McpTestFixture::with_snapshot(&theme_snapshot()).unwrap();
    let server = VarportMcpServer::new();

    let result = server
        .export_tokens(Parameters(params(&fixture, "Sepia", None)))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(true));
    assert_eq!(
        tool_result_text(&result),
        "Please select a collection and mode to export."
    );
}

#[tokio::test]
async fn test_minimized_set_needs_modes() {
    let fixture = McpTestFixture::with_snapshot(&theme_snapshot()).unwrap();
    let server = VarportMcpServer::new();

    let result = server
        .export_tokens(Parameters(params(&fixture, "Light", Some("minimized-set"))))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(true));
    assert_eq!(
        tool_result_text(&result),
        "Please select a structure mode and value mode for the minimized set."
    );
}

#[tokio::test]
async fn test_selector_from_config() {
    let fixture = McpTestFixture::with_snapshot(&theme_snapshot()).unwrap();
    fixture
        .write_config(&json!({ "selector": ".theme-light" }))
        .unwrap();
    let server = VarportMcpServer::new();

    let result = server
        .export_tokens(Parameters(params(&fixture, "Light", Some("cssVar"))))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert!(
        json_result["content"]
            .as_str()
            .unwrap()
            .starts_with(".theme-light {")
    );
}
