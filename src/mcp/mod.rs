//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes the export engine to AI assistants as two tools:
//! `list_collections` and `export_tokens`.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{VarportMcpServer, run_server};
