//! Export formats and their generators.
//!
//! Every generator consumes the resolved `(name, value)` pairs for one mode
//! and produces a [`TokenDocument`]. The minimized set is not a generator:
//! it works on the raw variables and lives in [`crate::minimize`].

mod camel;
mod css;
mod dot;
mod w3c;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use camel::CamelCaseGenerator;
pub use css::{CssVarGenerator, css_value};
pub use dot::{DotNotationGenerator, sanitize_value};
pub use w3c::W3cGenerator;

use crate::document::TokenDocument;
use crate::export::ExportError;
use crate::model::Literal;
use crate::resolve::ResolvedToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum ExportFormat {
    /// CSS custom properties in a single rule
    #[value(alias = "cssVar")]
    CssVar,
    /// Flat object keyed by camelCase identifiers
    #[value(alias = "camelCase")]
    CamelCase,
    /// Nested object, one level per path segment
    #[value(alias = "dotNotation")]
    DotNotation,
    /// W3C design token document
    W3c,
    /// Deduplicated set, one entry per distinct value
    #[value(alias = "minimizedSet")]
    MinimizedSet,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::CssVar => "cssVar",
            ExportFormat::CamelCase => "camelCase",
            ExportFormat::DotNotation => "dotNotation",
            ExportFormat::W3c => "w3c",
            ExportFormat::MinimizedSet => "minimizedSet",
        }
    }

    /// Tree-shaped formats report the flat pair count rather than the number
    /// of top-level keys left after nesting.
    pub fn is_nested(&self) -> bool {
        matches!(self, ExportFormat::DotNotation | ExportFormat::W3c)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cssVar" | "css-var" => Ok(ExportFormat::CssVar),
            "camelCase" | "camel-case" => Ok(ExportFormat::CamelCase),
            "dotNotation" | "dot-notation" => Ok(ExportFormat::DotNotation),
            "w3c" => Ok(ExportFormat::W3c),
            "minimizedSet" | "minimized-set" => Ok(ExportFormat::MinimizedSet),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum ValueFormat {
    /// Literal values
    #[default]
    #[value(alias = "rawValue")]
    RawValue,
    /// Names of the tokens that aliases point at
    #[value(alias = "aliasName")]
    AliasName,
}

impl FromStr for ValueFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rawValue" | "raw-value" | "Raw value" => Ok(ValueFormat::RawValue),
            "aliasName" | "alias-name" | "Alias name" => Ok(ValueFormat::AliasName),
            other => Err(ExportError::UnknownValueFormat(other.to_string())),
        }
    }
}

#[enum_dispatch]
pub trait Generate {
    fn generate(&self, tokens: &[ResolvedToken]) -> TokenDocument;
}

#[enum_dispatch(Generate)]
#[derive(Debug, Clone)]
pub enum Generator {
    CssVar(CssVarGenerator),
    CamelCase(CamelCaseGenerator),
    DotNotation(DotNotationGenerator),
    W3c(W3cGenerator),
}

impl Generator {
    /// Generator for a format, `None` for the minimized set.
    pub fn for_format(format: ExportFormat, selector: &str) -> Option<Self> {
        match format {
            ExportFormat::CssVar => Some(CssVarGenerator::new(selector).into()),
            ExportFormat::CamelCase => Some(CamelCaseGenerator.into()),
            ExportFormat::DotNotation => Some(DotNotationGenerator.into()),
            ExportFormat::W3c => Some(W3cGenerator.into()),
            ExportFormat::MinimizedSet => None,
        }
    }
}

/// JSON form of a literal: numbers, strings and booleans as themselves,
/// colors as their channel object.
pub fn literal_json(literal: &Literal) -> Value {
    serde_json::to_value(literal).unwrap_or_default()
}

/// Insert a value at a nested path, creating intermediate objects as needed.
///
/// An intermediate key that already holds a group is reused; one that holds
/// a leaf (as decided by `is_leaf`) is replaced by an empty group.
pub(crate) fn insert_nested(
    root: &mut Map<String, Value>,
    path: &[&str],
    value: Value,
    is_leaf: fn(&Value) -> bool,
) {
    let Some((first, rest)) = path.split_first() else {
        return;
    };

    if rest.is_empty() {
        root.insert(first.to_string(), value);
        return;
    }

    let next_level = root
        .entry(first.to_string())
        .or_insert_with(|| Value::Object(Map::new()));

    if is_leaf(next_level) {
        tracing::debug!(key = %first, "replacing token leaf with a group");
        *next_level = Value::Object(Map::new());
    }

    if let Value::Object(inner) = next_level {
        insert_nested(inner, rest, value, is_leaf);
    }
}
