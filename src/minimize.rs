//! Minimized-set deduplication.
//!
//! Collapses a collection into the smallest flat token set in which every
//! distinct value appears exactly once, named by the shortest CSS name among
//! the variables sharing it.
//!
//! Two independently chosen modes drive it: the *structure mode* supplies the
//! grouping path of every variable (its value when that is a string, the
//! variable name otherwise) and the *value mode* supplies the value that is
//! emitted and compared.
//!
//! The algorithm runs in two passes:
//!
//! 1. Build the token tree from the structure paths and an immutable index
//!    from canonical value to candidate names, sorted by length (stable, so
//!    equal lengths keep discovery order).
//! 2. Walk the tree depth-first. The first leaf reaching a value emits it
//!    under the best candidate name; later leaves with the same value emit
//!    nothing.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::export::ExportError;
use crate::model::{Mode, Variable, VariableValue};
use crate::naming::css_var_name;
use crate::resolve::ResolveError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimizedSetOptions {
    pub structure_mode: Option<Mode>,
    pub value_mode: Option<Mode>,
}

impl MinimizedSetOptions {
    pub fn new(structure_mode: Mode, value_mode: Mode) -> Self {
        Self {
            structure_mode: Some(structure_mode),
            value_mode: Some(value_mode),
        }
    }

    fn selected(&self) -> Option<(&Mode, &Mode)> {
        let structure = self.structure_mode.as_ref().filter(|m| m.is_set())?;
        let value = self.value_mode.as_ref().filter(|m| m.is_set())?;
        Some((structure, value))
    }
}

#[derive(Debug, Default)]
pub struct Minimized {
    pub tokens: Map<String, Value>,
    pub skipped: Vec<ResolveError>,
}

struct Leaf<'a> {
    value: &'a VariableValue,
    original: &'a str,
}

/// A tree level. A key can hold leaves and a subtree at the same time when
/// one variable's path is a prefix of another's.
#[derive(Default)]
struct Node<'a> {
    leaves: Vec<Leaf<'a>>,
    children: Vec<(&'a str, Node<'a>)>,
}

impl<'a> Node<'a> {
    fn child(&mut self, key: &'a str) -> &mut Node<'a> {
        let index = match self.children.iter().position(|(k, _)| *k == key) {
            Some(index) => index,
            None => {
                self.children.push((key, Node::default()));
                self.children.len() - 1
            }
        };
        &mut self.children[index].1
    }

    fn insert(&mut self, path: &'a str, leaf: Leaf<'a>) {
        let node = path.split('/').fold(self, |node, segment| node.child(segment));
        node.leaves.push(leaf);
    }
}

/// Canonical value -> candidate names, shortest first.
struct CandidateIndex {
    names: HashMap<String, Vec<String>>,
}

impl CandidateIndex {
    fn best(&self, canonical: &str) -> Option<&str> {
        self.names
            .get(canonical)
            .and_then(|names| names.first())
            .map(String::as_str)
    }
}

pub fn minimize(
    variables: &[Variable],
    options: &MinimizedSetOptions,
) -> Result<Minimized, ExportError> {
    let (structure_mode, value_mode) = options.selected().ok_or(ExportError::MinimizerModesUnset)?;

    let mut skipped = Vec::new();
    let mut tree = Node::default();
    let mut names: HashMap<String, Vec<String>> = HashMap::new();

    for variable in variables {
        let Some(value) = variable.value_for(&value_mode.mode_id) else {
            skipped.push(ResolveError::MissingModeValue {
                variable: variable.name.clone(),
                mode: value_mode.name.clone(),
            });
            continue;
        };

        names
            .entry(value.canonical())
            .or_default()
            .push(css_var_name(&variable.name));

        let path = variable
            .value_for(&structure_mode.mode_id)
            .and_then(VariableValue::as_path)
            .unwrap_or(&variable.name);
        tree.insert(
            path,
            Leaf {
                value,
                original: &variable.name,
            },
        );
    }

    for candidates in names.values_mut() {
        candidates.sort_by_key(String::len);
    }
    let index = CandidateIndex { names };

    let mut tokens = Map::new();
    let mut consumed = HashSet::new();
    collapse(&tree, &index, &mut consumed, &mut tokens);

    tracing::debug!(
        variables = variables.len(),
        tokens = tokens.len(),
        "minimized token set"
    );

    Ok(Minimized { tokens, skipped })
}

fn collapse(
    node: &Node<'_>,
    index: &CandidateIndex,
    consumed: &mut HashSet<String>,
    result: &mut Map<String, Value>,
) {
    for leaf in &node.leaves {
        let canonical = leaf.value.canonical();
        if consumed.contains(&canonical) {
            continue;
        }
        if let Some(name) = index.best(&canonical) {
            tracing::trace!(original = leaf.original, token = name, "keeping token");
            result.insert(
                name.to_string(),
                serde_json::to_value(leaf.value).unwrap_or_default(),
            );
            consumed.insert(canonical);
        }
    }

    for (_, child) in &node.children {
        collapse(child, index, consumed, result);
    }
}
