use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::{Value, json};
use tempfile::TempDir;

mod tools;

/// Test fixture for MCP integration tests
///
/// Manages a temporary project holding a variable snapshot and, optionally,
/// a `.varportrc.json`.
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;
        fs::create_dir(project_root.join(".git"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with `variables.json` holding `snapshot`
    pub fn with_snapshot(snapshot: &Value) -> Result<Self> {
        let fixture = Self::new()?;
        fixture.write_json("variables.json", snapshot)?;
        Ok(fixture)
    }

    pub fn write_json(&self, relative_path: &str, content: &Value) -> Result<()> {
        let path = self.project_root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(())
    }

    /// Write a .varportrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        self.write_json(".varportrc.json", content)
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

/// Theme collection with Light / Dark modes aliasing a primitives collection
pub fn theme_snapshot() -> Value {
    json!({
        "meta": {
            "variableCollections": {
                "VariableCollectionId:1:0": {
                    "id": "VariableCollectionId:1:0",
                    "name": "Primitives",
                    "defaultModeId": "1:0",
                    "modes": [{"modeId": "1:0", "name": "Value"}],
                    "variableIds": ["VariableID:1:1"]
                },
                "VariableCollectionId:2:0": {
                    "id": "VariableCollectionId:2:0",
                    "name": "Theme",
                    "defaultModeId": "2:0",
                    "modes": [
                        {"modeId": "2:0", "name": "Light"},
                        {"modeId": "2:1", "name": "Dark"}
                    ],
                    "variableIds": ["VariableID:2:1", "VariableID:2:2", "VariableID:2:3"]
                }
            },
            "variables": {
                "VariableID:1:1": {
                    "id": "VariableID:1:1",
                    "name": "blue/500",
                    "variableCollectionId": "VariableCollectionId:1:0",
                    "valuesByMode": {"1:0": "#0000FF"}
                },
                "VariableID:2:1": {
                    "id": "VariableID:2:1",
                    "name": "spacing/small",
                    "variableCollectionId": "VariableCollectionId:2:0",
                    "valuesByMode": {"2:0": 4, "2:1": 4}
                },
                "VariableID:2:2": {
                    "id": "VariableID:2:2",
                    "name": "color/link",
                    "variableCollectionId": "VariableCollectionId:2:0",
                    "valuesByMode": {
                        "2:0": {"type": "VARIABLE_ALIAS", "id": "VariableID:1:1"},
                        "2:1": {"type": "VARIABLE_ALIAS", "id": "VariableID:1:1"}
                    }
                },
                "VariableID:2:3": {
                    "id": "VariableID:2:3",
                    "name": "color/accent",
                    "variableCollectionId": "VariableCollectionId:2:0",
                    "valuesByMode": {"2:0": "#0000FF", "2:1": "#00FFFF"}
                }
            }
        }
    })
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    serde_json::from_str(&tool_result_text(result)).expect("Tool result should be valid JSON")
}

/// Text of the first content item of a tool result
pub fn tool_result_text(result: &rmcp::model::CallToolResult) -> String {
    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    content_item
        .as_text()
        .expect("Tool result content should be text")
        .text
        .clone()
}
