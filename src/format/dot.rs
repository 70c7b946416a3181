use serde_json::{Map, Value};

use crate::document::TokenDocument;
use crate::model::Literal;
use crate::resolve::{ResolvedToken, TokenValue};

use super::{Generate, css_value, insert_nested};

/// Nested object with one level per path segment and string leaves.
#[derive(Debug, Clone, Copy)]
pub struct DotNotationGenerator;

impl Generate for DotNotationGenerator {
    fn generate(&self, tokens: &[ResolvedToken]) -> TokenDocument {
        let mut root = Map::new();
        for token in tokens {
            let leaf = match &token.value {
                TokenValue::Literal(Literal::String(s)) => sanitize_value(s),
                TokenValue::Reference(name) => name.to_string(),
                other => sanitize_value(&css_value(other)),
            };
            insert_nested(
                &mut root,
                &token.name.segments(),
                Value::String(leaf),
                |value| !value.is_object(),
            );
        }
        TokenDocument::Json(root)
    }
}

/// Strip quote characters and a trailing statement terminator.
///
/// ```
/// use varport::format::sanitize_value;
///
/// assert_eq!(sanitize_value("'Inter';"), "Inter");
/// assert_eq!(sanitize_value("4"), "4");
/// ```
pub fn sanitize_value(raw: &str) -> String {
    let unquoted: String = raw.chars().filter(|c| !matches!(c, '\'' | '"')).collect();
    let trimmed = unquoted.trim();
    trimmed.strip_suffix(';').unwrap_or(trimmed).to_string()
}
