use serde_json::{Map, Value};

use crate::document::TokenDocument;
use crate::resolve::{ResolvedToken, TokenValue};

use super::{Generate, literal_json};

/// Flat `{ "colorBrandPrimary": value }` object.
#[derive(Debug, Clone, Copy)]
pub struct CamelCaseGenerator;

impl Generate for CamelCaseGenerator {
    fn generate(&self, tokens: &[ResolvedToken]) -> TokenDocument {
        let mut map = Map::new();
        for token in tokens {
            let value = match &token.value {
                TokenValue::Literal(literal) => literal_json(literal),
                TokenValue::Reference(name) => Value::String(name.to_string()),
            };
            map.insert(token.name.to_string(), value);
        }
        TokenDocument::Json(map)
    }
}
