use std::path::Path;

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
    config::{Config, load_config},
    export::{ExportError, ExportRequest, run_export},
    format::{ExportFormat, ValueFormat},
    minimize::MinimizedSetOptions,
    model::{Mode, VariableCollection},
    source::{SnapshotSource, VariableSource},
};

use super::types::{
    CollectionInfo, CollectionsResult, ExportTokensParams, ExportTokensResult,
    ListCollectionsParams,
};

#[derive(Clone)]
pub struct VarportMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for VarportMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl VarportMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// List variable collections in the snapshot
    #[tool(
        description = "List the variable collections in the project's variable snapshot with their modes and variable counts."
    )]
    pub async fn list_collections(
        &self,
        params: Parameters<ListCollectionsParams>,
    ) -> Result<CallToolResult, McpError> {
        let root = Path::new(&params.0.project_root_path);
        let (_, source) = load_source(root, params.0.snapshot_path.as_deref())?;

        let collections = source.list_collections().await.map_err(|e| {
            McpError::internal_error(format!("Failed to list collections: {}", e), None)
        })?;

        json_result(&CollectionsResult {
            collections: collections.into_iter().map(CollectionInfo::from).collect(),
        })
    }

    /// Export one collection mode as a token document
    #[tool(
        description = "Export one collection mode as design tokens. Formats: cssVar, camelCase, dotNotation, w3c, minimizedSet. minimizedSet needs structureMode and valueMode."
    )]
    pub async fn export_tokens(
        &self,
        params: Parameters<ExportTokensParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let root = Path::new(&params.project_root_path);
        let (config, source) = load_source(root, params.snapshot_path.as_deref())?;

        let request = match build_request(&params, &config, &source) {
            Ok(request) => request,
            Err(err) => {
                tracing::error!("Invalid export request: {}", err);
                return Ok(notice_result(&err));
            }
        };

        match run_export(&source, &request).await {
            Ok(output) => json_result(&ExportTokensResult {
                format: output.format.to_string(),
                token_count: output.token_count,
                notice: output.notice(),
                document: output.document.to_json(),
                content: output.render(),
                skipped: output.skipped.iter().map(ToString::to_string).collect(),
            }),
            Err(err) => Ok(notice_result(&err)),
        }
    }
}

fn load_source(root: &Path, snapshot: Option<&str>) -> Result<(Config, SnapshotSource), McpError> {
    let config = load_config(root)
        .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))?
        .config;

    let path = match snapshot {
        Some(snapshot) => root.join(snapshot),
        None => config.snapshot_path(root),
    };
    let source = SnapshotSource::load(&path)
        .map_err(|e| McpError::internal_error(format!("{:#}", e), None))?;

    Ok((config, source))
}

fn build_request(
    params: &ExportTokensParams,
    config: &Config,
    source: &SnapshotSource,
) -> Result<ExportRequest, ExportError> {
    let format = match params.format.as_deref() {
        Some(format) => format.parse::<ExportFormat>()?,
        None => config.format,
    };
    let value_format = match params.value_format.as_deref() {
        Some(value_format) => value_format.parse::<ValueFormat>()?,
        None => config.value_format,
    };

    let collection = source
        .collection_by_name(&params.collection)
        .or_else(|| source.collection(&params.collection))
        .cloned();
    let mode = find_mode(collection.as_ref(), Some(&params.mode));

    Ok(ExportRequest {
        mode,
        format,
        value_format,
        minimized: Some(MinimizedSetOptions {
            structure_mode: find_mode(collection.as_ref(), params.structure_mode.as_deref()),
            value_mode: find_mode(collection.as_ref(), params.value_mode.as_deref()),
        }),
        selector: config.selector.clone(),
        collection,
    })
}

fn find_mode(collection: Option<&VariableCollection>, name: Option<&str>) -> Option<Mode> {
    collection?.mode_by_name(name?).cloned()
}

fn notice_result(err: &ExportError) -> CallToolResult {
    CallToolResult::error(vec![Content::text(err.to_string())])
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for VarportMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Varport MCP exports design-tool variables as design tokens.\n\n\
                 Available tools:\n\
                 1. list_collections - List collections, their modes and variable counts\n\
                 2. export_tokens - Export one collection mode as cssVar, camelCase, dotNotation, w3c or minimizedSet\n\n\
                 Recommended Workflow:\n\
                 1. Use list_collections to find the collection and mode names\n\
                 2. Call export_tokens with those names and the wanted format\n\
                 3. For minimizedSet also pass structureMode and valueMode"
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
            let service = VarportMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
