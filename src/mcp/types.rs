use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::VariableCollection;

// ============================================================
// Collections Types (list_collections)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListCollectionsParams {
    /// Project directory; the config file is looked up from here
    pub project_root_path: String,
    /// Variable snapshot, relative to the project root (overrides config)
    #[serde(default)]
    pub snapshot_path: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectionsResult {
    pub collections: Vec<CollectionInfo>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectionInfo {
    pub id: String,
    pub name: String,
    pub default_mode: Option<String>,
    pub modes: Vec<String>,
    pub variable_count: usize,
}

impl From<VariableCollection> for CollectionInfo {
    fn from(c: VariableCollection) -> Self {
        Self {
            default_mode: c.default_mode().map(|m| m.name.clone()),
            modes: c.modes.into_iter().map(|m| m.name).collect(),
            variable_count: c.variable_ids.len(),
            id: c.id,
            name: c.name,
        }
    }
}

// ============================================================
// Export Types (export_tokens)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportTokensParams {
    /// Project directory; the config file is looked up from here
    pub project_root_path: String,
    /// Variable snapshot, relative to the project root (overrides config)
    #[serde(default)]
    pub snapshot_path: Option<String>,
    /// Collection name or id
    pub collection: String,
    /// Mode name
    pub mode: String,
    /// cssVar, camelCase, dotNotation, w3c or minimizedSet (default from config)
    #[serde(default)]
    pub format: Option<String>,
    /// rawValue or aliasName (default from config)
    #[serde(default)]
    pub value_format: Option<String>,
    /// Structure mode name, minimizedSet only
    #[serde(default)]
    pub structure_mode: Option<String>,
    /// Value mode name, minimizedSet only
    #[serde(default)]
    pub value_mode: Option<String>,
}

/// Result of export_tokens
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportTokensResult {
    pub format: String,
    pub token_count: usize,
    pub notice: String,
    /// Document as JSON; a CSS block becomes a flat name -> value object
    pub document: Value,
    /// Document text as it would be copied
    pub content: String,
    /// Variables left out, with the reason
    pub skipped: Vec<String>,
}
