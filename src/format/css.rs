use crate::document::{CssBlock, Declaration, TokenDocument};
use crate::model::Literal;
use crate::resolve::{ResolvedToken, TokenValue};

use super::Generate;

/// `--name: value;` declarations wrapped in one rule.
#[derive(Debug, Clone)]
pub struct CssVarGenerator {
    selector: String,
}

impl CssVarGenerator {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }
}

impl Generate for CssVarGenerator {
    fn generate(&self, tokens: &[ResolvedToken]) -> TokenDocument {
        let declarations = tokens
            .iter()
            .map(|token| Declaration {
                name: token.name.to_string(),
                value: css_value(&token.value),
            })
            .collect();

        TokenDocument::Css(CssBlock {
            selector: self.selector.clone(),
            declarations,
        })
    }
}

/// CSS text for a resolved value.
///
/// Strings are single-quoted, colors use functional notation and references
/// become `var()` lookups.
pub fn css_value(value: &TokenValue) -> String {
    match value {
        TokenValue::Literal(Literal::String(s)) => {
            format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
        }
        TokenValue::Literal(Literal::Number(n)) => n.to_string(),
        TokenValue::Literal(Literal::Boolean(b)) => b.to_string(),
        TokenValue::Literal(Literal::Color(color)) => color.to_css(),
        TokenValue::Reference(name) => format!("var({})", name),
    }
}
