//! Token documents and their text rendering.

use std::fmt::Write;

use serde_json::{Map, Value};

use crate::format::ExportFormat;
use crate::resolve::ResolveError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
}

/// A single CSS rule holding custom property declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssBlock {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

/// Output of one export. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenDocument {
    Css(CssBlock),
    /// Object document; key order is insertion order.
    Json(Map<String, Value>),
}

impl TokenDocument {
    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        match self {
            TokenDocument::Css(block) => block.declarations.len(),
            TokenDocument::Json(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The document as JSON. A CSS block becomes a flat name -> value object.
    pub fn to_json(&self) -> Value {
        match self {
            TokenDocument::Css(block) => Value::Object(
                block
                    .declarations
                    .iter()
                    .map(|d| (d.name.clone(), Value::String(d.value.clone())))
                    .collect(),
            ),
            TokenDocument::Json(map) => Value::Object(map.clone()),
        }
    }

    /// Clipboard-ready text: the CSS rule, or pretty-printed JSON.
    pub fn render(&self) -> String {
        match self {
            TokenDocument::Css(block) => {
                let mut out = format!("{} {{\n", block.selector);
                for declaration in &block.declarations {
                    let _ = writeln!(out, "  {}: {};", declaration.name, declaration.value);
                }
                out.push('}');
                out
            }
            TokenDocument::Json(map) => {
                serde_json::to_string_pretty(map).unwrap_or_else(|_| "{}".to_string())
            }
        }
    }
}

/// Result of a successful export.
#[derive(Debug, Clone)]
pub struct ExportOutput {
    pub format: ExportFormat,
    pub document: TokenDocument,
    /// Tokens emitted, counted before any nesting.
    pub token_count: usize,
    /// Entries that could not be resolved and were left out.
    pub skipped: Vec<ResolveError>,
}

impl ExportOutput {
    pub fn render(&self) -> String {
        self.document.render()
    }

    /// Success notice shown to the user.
    pub fn notice(&self) -> String {
        format!(
            "Exported {} {}.",
            self.token_count,
            if self.token_count == 1 { "token" } else { "tokens" }
        )
    }
}
