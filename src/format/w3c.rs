use serde_json::{Map, Value, json};

use crate::document::TokenDocument;
use crate::resolve::{ResolvedToken, TokenValue};

use super::{Generate, insert_nested, literal_json};

/// Nested token groups with `{ value, original }` leaves. References use the
/// `{group.token}` alias syntax of the W3C design token format.
#[derive(Debug, Clone, Copy)]
pub struct W3cGenerator;

impl Generate for W3cGenerator {
    fn generate(&self, tokens: &[ResolvedToken]) -> TokenDocument {
        let mut root = Map::new();

        for token in tokens {
            let value = match &token.value {
                TokenValue::Literal(literal) => literal_json(literal),
                TokenValue::Reference(name) => Value::String(format!("{{{}}}", name)),
            };
            let leaf = json!({ "value": value, "original": token.source });

            insert_nested(&mut root, &token.name.segments(), leaf, is_token);
        }

        TokenDocument::Json(root)
    }
}

/// Leaves are the `{ value, original }` objects; anything else is a group.
fn is_token(value: &Value) -> bool {
    !value.is_object() || (value.get("value").is_some() && value.get("original").is_some())
}
