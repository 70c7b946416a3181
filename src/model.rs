//! Host variable data model.
//!
//! These types mirror the shape in which the design tool exposes its local
//! variables: collections own an ordered list of modes and reference their
//! variables by id, and every variable stores one value per mode. A value is
//! either a literal or an alias pointing at another variable.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

/// A named "column" of values within a collection (e.g. Light / Dark).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mode {
    pub mode_id: String,
    pub name: String,
}

impl Mode {
    pub fn new(mode_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            mode_id: mode_id.into(),
            name: name.into(),
        }
    }

    /// A mode with an empty id is a placeholder that was never selected.
    pub fn is_set(&self) -> bool {
        !self.mode_id.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableCollection {
    pub id: String,
    pub name: String,
    pub default_mode_id: String,
    #[serde(default)]
    pub modes: Vec<Mode>,
    #[serde(default)]
    pub variable_ids: Vec<String>,
}

impl VariableCollection {
    pub fn mode_by_name(&self, name: &str) -> Option<&Mode> {
        self.modes.iter().find(|mode| mode.name == name)
    }

    pub fn mode_by_id(&self, mode_id: &str) -> Option<&Mode> {
        self.modes.iter().find(|mode| mode.mode_id == mode_id)
    }

    pub fn default_mode(&self) -> Option<&Mode> {
        self.mode_by_id(&self.default_mode_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub id: String,
    /// Hierarchical path, segments separated by `/`.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_collection_id: Option<String>,
    #[serde(default)]
    pub values_by_mode: HashMap<String, VariableValue>,
}

impl Variable {
    pub fn value_for(&self, mode_id: &str) -> Option<&VariableValue> {
        self.values_by_mode.get(mode_id)
    }
}

/// Value stored for one mode.
///
/// Serialized transparently so that the canonical JSON form of a value is
/// exactly what the host produced (`{"type":"VARIABLE_ALIAS","id":..}` for
/// aliases, `{"r":..,"g":..,"b":..,"a":..}` for colors).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    Alias(VariableAlias),
    Literal(Literal),
}

impl VariableValue {
    pub fn as_alias(&self) -> Option<&VariableAlias> {
        match self {
            VariableValue::Alias(alias) => Some(alias),
            VariableValue::Literal(_) => None,
        }
    }

    /// The value as a grouping path, if it is a string.
    pub fn as_path(&self) -> Option<&str> {
        match self {
            VariableValue::Literal(Literal::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Stable JSON serialization used for value identity.
    ///
    /// Field order is fixed by the struct definitions, so structurally equal
    /// values always produce the same string.
    pub fn canonical(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl From<Literal> for VariableValue {
    fn from(literal: Literal) -> Self {
        VariableValue::Literal(literal)
    }
}

impl From<VariableAlias> for VariableValue {
    fn from(alias: VariableAlias) -> Self {
        VariableValue::Alias(alias)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Color(Color),
    Boolean(bool),
    #[serde(deserialize_with = "deserialize_number")]
    Number(Number),
    String(String),
}

impl Literal {
    pub fn string(value: impl Into<String>) -> Self {
        Literal::String(value.into())
    }

    pub fn number(value: i64) -> Self {
        Literal::Number(Number::from(value))
    }

    #[cfg(test)]
    pub fn float(value: f64) -> Self {
        Literal::Number(normalize_number(
            Number::from_f64(value).unwrap_or_else(|| Number::from(0)),
        ))
    }
}

/// Largest magnitude below which every integer is exactly representable as `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// The host has a single number type, so `4.0` and `4` are the same value.
/// Integral floats are stored as integers to keep value identity and output
/// stable.
fn normalize_number(number: Number) -> Number {
    match number.as_f64() {
        Some(f) if number.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => {
            Number::from(f as i64)
        }
        _ => number,
    }
}

fn deserialize_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Number, D::Error> {
    Number::deserialize(deserializer).map(normalize_number)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AliasKind {
    VariableAlias,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableAlias {
    #[serde(rename = "type")]
    pub kind: AliasKind,
    pub id: String,
}

impl VariableAlias {
    pub fn to(id: impl Into<String>) -> Self {
        Self {
            kind: AliasKind::VariableAlias,
            id: id.into(),
        }
    }
}

/// RGB(A) color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl Color {
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: Some(a),
        }
    }

    /// CSS functional notation with 8-bit channels.
    pub fn to_css(&self) -> String {
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        match self.a {
            Some(a) => format!(
                "rgba({}, {}, {}, {})",
                channel(self.r),
                channel(self.g),
                channel(self.b),
                format_alpha(a)
            ),
            None => format!(
                "rgb({}, {}, {})",
                channel(self.r),
                channel(self.g),
                channel(self.b)
            ),
        }
    }
}

fn format_alpha(alpha: f64) -> String {
    let text = format!("{:.3}", alpha.clamp(0.0, 1.0));
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
