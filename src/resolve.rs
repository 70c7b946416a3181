//! Value resolution.
//!
//! Resolves the value a variable holds for one mode into a [`TokenValue`]:
//! either the literal itself, or (for [`ValueFormat::AliasName`]) the
//! transformed name of the variable an alias chain ends at.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::format::{ExportFormat, ValueFormat};
use crate::model::{Literal, Mode, Variable, VariableCollection, VariableValue};
use crate::naming::{TokenName, transform};

/// Resolved value of a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Literal(Literal),
    /// Name of the referenced token, transformed for the export format.
    Reference(TokenName),
}

/// One exported (name, value) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedToken {
    /// Source variable path (`color/brand/primary`).
    pub source: String,
    pub name: TokenName,
    pub value: TokenValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("'{variable}' has no value for mode '{mode}'")]
    MissingModeValue { variable: String, mode: String },

    #[error("'{variable}' aliases a variable that could not be fetched ({target})")]
    MissingAliasTarget { variable: String, target: String },

    #[error("alias cycle: {}", chain.join(" -> "))]
    AliasCycle { variable: String, chain: Vec<String> },
}

impl ResolveError {
    /// Path of the variable that was skipped.
    pub fn variable(&self) -> &str {
        match self {
            ResolveError::MissingModeValue { variable, .. }
            | ResolveError::MissingAliasTarget { variable, .. }
            | ResolveError::AliasCycle { variable, .. } => variable,
        }
    }
}

/// Outcome of resolving a batch of variables.
#[derive(Debug, Default)]
pub struct Resolution {
    pub tokens: Vec<ResolvedToken>,
    pub skipped: Vec<ResolveError>,
}

pub struct Resolver<'a> {
    by_id: HashMap<&'a str, &'a Variable>,
    default_modes: HashMap<&'a str, &'a str>,
    mode_names: HashMap<&'a str, &'a str>,
    format: ExportFormat,
    value_format: ValueFormat,
}

impl<'a> Resolver<'a> {
    /// `variables` must contain every variable an alias may point at; ids
    /// missing from it are treated as unfetchable targets. `collections`
    /// supplies the default mode used when a target lives in another
    /// collection.
    pub fn new(
        variables: impl IntoIterator<Item = &'a Variable>,
        collections: &'a [VariableCollection],
        format: ExportFormat,
        value_format: ValueFormat,
    ) -> Self {
        Self {
            by_id: variables
                .into_iter()
                .map(|variable| (variable.id.as_str(), variable))
                .collect(),
            default_modes: collections
                .iter()
                .map(|c| (c.id.as_str(), c.default_mode_id.as_str()))
                .collect(),
            mode_names: collections
                .iter()
                .flat_map(|c| &c.modes)
                .map(|m| (m.mode_id.as_str(), m.name.as_str()))
                .collect(),
            format,
            value_format,
        }
    }

    pub fn resolve_all(&self, variables: &[Variable], mode: &Mode) -> Resolution {
        let mut resolution = Resolution::default();

        for variable in variables {
            match self.resolve(variable, mode) {
                Ok(token) => resolution.tokens.push(token),
                Err(err) => {
                    tracing::debug!(variable = %variable.name, "skipping token: {}", err);
                    resolution.skipped.push(err);
                }
            }
        }

        resolution
    }

    pub fn resolve(&self, variable: &Variable, mode: &Mode) -> Result<ResolvedToken, ResolveError> {
        let value = variable
            .value_for(&mode.mode_id)
            .ok_or_else(|| ResolveError::MissingModeValue {
                variable: variable.name.clone(),
                mode: mode.name.clone(),
            })?;

        let value = match value {
            VariableValue::Literal(literal) => TokenValue::Literal(literal.clone()),
            VariableValue::Alias(_) => {
                let (target, literal) = self.follow_aliases(variable, mode)?;
                match self.value_format {
                    ValueFormat::AliasName => {
                        TokenValue::Reference(transform(&target.name, self.format))
                    }
                    ValueFormat::RawValue => TokenValue::Literal(literal.clone()),
                }
            }
        };

        Ok(ResolvedToken {
            source: variable.name.clone(),
            name: transform(&variable.name, self.format),
            value,
        })
    }

    /// Follow the alias chain starting at `origin` until a literal is found.
    ///
    /// Returns the variable holding the literal together with the literal.
    fn follow_aliases<'v>(
        &'v self,
        origin: &'v Variable,
        mode: &'v Mode,
    ) -> Result<(&'v Variable, &'v Literal), ResolveError> {
        let mut visited = HashSet::from([origin.id.as_str()]);
        let mut chain = vec![origin.name.clone()];
        let mut current = origin;
        let mut current_mode = mode.mode_id.as_str();

        loop {
            let value = current
                .value_for(current_mode)
                .ok_or_else(|| ResolveError::MissingModeValue {
                    variable: origin.name.clone(),
                    mode: self.mode_name(current_mode, mode),
                })?;

            let alias = match value {
                VariableValue::Literal(literal) => return Ok((current, literal)),
                VariableValue::Alias(alias) => alias,
            };

            let target = self.by_id.get(alias.id.as_str()).copied().ok_or_else(|| {
                ResolveError::MissingAliasTarget {
                    variable: origin.name.clone(),
                    target: alias.id.clone(),
                }
            })?;

            chain.push(target.name.clone());
            if !visited.insert(target.id.as_str()) {
                return Err(ResolveError::AliasCycle {
                    variable: origin.name.clone(),
                    chain,
                });
            }

            current_mode = self.mode_for(target, current_mode);
            current = target;
        }
    }

    /// Display name of a mode id, falling back to the id of modes from
    /// collections the resolver was not given.
    fn mode_name(&self, mode_id: &str, requested: &Mode) -> String {
        if mode_id == requested.mode_id {
            return requested.name.clone();
        }
        self.mode_names
            .get(mode_id)
            .map_or_else(|| mode_id.to_string(), |name| name.to_string())
    }

    /// The requested mode when the target has a value for it, otherwise the
    /// default mode of the target's own collection.
    fn mode_for<'m>(&'m self, target: &Variable, requested: &'m str) -> &'m str {
        if target.values_by_mode.contains_key(requested) {
            return requested;
        }

        target
            .variable_collection_id
            .as_deref()
            .and_then(|id| self.default_modes.get(id).copied())
            .unwrap_or(requested)
    }
}
