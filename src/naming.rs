//! Token name transformation.
//!
//! Turns a hierarchical variable path (`color/brand/primary`) into the
//! identifier used by an export format. Flat formats get a single string,
//! tree-shaped formats keep the segments so the generator can nest them.

use std::fmt;

use crate::format::ExportFormat;

/// A transformed token name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenName {
    /// Single identifier (`--color-brand-primary`, `colorBrandPrimary`).
    Flat(String),
    /// Nested key sequence (`["color", "brand", "primary"]`).
    Path(Vec<String>),
}

impl TokenName {
    /// Nesting keys for tree-shaped documents. A flat name is a single key.
    pub fn segments(&self) -> Vec<&str> {
        match self {
            TokenName::Flat(name) => vec![name.as_str()],
            TokenName::Path(segments) => segments.iter().map(String::as_str).collect(),
        }
    }
}

impl fmt::Display for TokenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenName::Flat(name) => f.write_str(name),
            TokenName::Path(segments) => f.write_str(&segments.join(".")),
        }
    }
}

/// Transform a variable path for the given export format.
///
/// The minimized set is keyed by CSS names, so it shares the `cssVar` rule.
pub fn transform(path: &str, format: ExportFormat) -> TokenName {
    match format {
        ExportFormat::CssVar | ExportFormat::MinimizedSet => TokenName::Flat(css_var_name(path)),
        ExportFormat::CamelCase => TokenName::Flat(camel_case_name(path)),
        ExportFormat::DotNotation | ExportFormat::W3c => TokenName::Path(
            path.split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        ),
    }
}

/// `color/Brand Primary` -> `--color-brand-primary`
///
/// ```
/// use varport::naming::css_var_name;
///
/// assert_eq!(css_var_name("spacing/small"), "--spacing-small");
/// assert_eq!(css_var_name("Color/Brand Primary"), "--color-brand-primary");
/// assert_eq!(css_var_name("--spacing-small"), "--spacing-small");
/// ```
pub fn css_var_name(path: &str) -> String {
    let joined = path
        .split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    let name = joined.split_whitespace().collect::<Vec<_>>().join("-");

    if name.starts_with("--") {
        name
    } else {
        format!("--{}", name)
    }
}

/// `color/brand/primary` -> `colorBrandPrimary`
///
/// Whitespace inside a segment is a word boundary as well, since it cannot
/// appear in a property identifier.
pub fn camel_case_name(path: &str) -> String {
    let mut name = String::with_capacity(path.len());

    let words = path
        .split('/')
        .flat_map(str::split_whitespace)
        .filter(|word| !word.is_empty());

    for (index, word) in words.enumerate() {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if index == 0 {
                name.extend(first.to_lowercase());
            } else {
                name.extend(first.to_uppercase());
            }
            name.push_str(chars.as_str());
        }
    }

    name
}
