//! Host variable data source.
//!
//! The design tool's variable store is reached only through the
//! [`VariableSource`] trait. The adapter functions here batch lookups and
//! turn every per-entry failure into absence, so one bad id never aborts an
//! export.

mod snapshot;

use std::collections::{BTreeSet, HashSet};

use anyhow::Result;
use async_trait::async_trait;
use futures::future::join_all;

pub use snapshot::SnapshotSource;

use crate::model::{Variable, VariableCollection, VariableValue};

/// Read-only access to the host's variables.
///
/// Lookups may be issued concurrently.
#[async_trait]
pub trait VariableSource: Send + Sync {
    async fn list_collections(&self) -> Result<Vec<VariableCollection>>;

    async fn collection_by_id(&self, id: &str) -> Result<Option<VariableCollection>>;

    async fn variable_by_id(&self, id: &str) -> Result<Option<Variable>>;
}

/// Everything one export needs from the source.
#[derive(Debug, Clone, Default)]
pub struct FetchedVariables {
    /// Variables of the exported collection, in `variableIds` order.
    pub members: Vec<Variable>,
    /// Alias targets living outside the exported collection.
    pub referenced: Vec<Variable>,
    /// All collections, used for the default mode of alias targets.
    pub collections: Vec<VariableCollection>,
}

impl FetchedVariables {
    /// Members and referenced variables, for alias lookups.
    pub fn all(&self) -> impl Iterator<Item = &Variable> {
        self.members.iter().chain(self.referenced.iter())
    }
}

/// List collections, treating a failure as an empty list.
pub async fn list_collections_or_empty<S>(source: &S) -> Vec<VariableCollection>
where
    S: VariableSource + ?Sized,
{
    match source.list_collections().await {
        Ok(collections) => collections,
        Err(err) => {
            tracing::warn!("Failed to fetch variable collections: {:#}", err);
            Vec::new()
        }
    }
}

/// Fetch variables by id concurrently and wait for the whole batch.
///
/// Ids that are unknown or whose lookup fails are left out; the result keeps
/// the order of `ids`.
pub async fn fetch_variables<S>(source: &S, ids: &[String]) -> Vec<Variable>
where
    S: VariableSource + ?Sized,
{
    let lookups = ids.iter().map(|id| async move {
        match source.variable_by_id(id).await {
            Ok(Some(variable)) => Some(variable),
            Ok(None) => {
                tracing::debug!(id = %id, "variable not found");
                None
            }
            Err(err) => {
                tracing::warn!(id = %id, "Error fetching variable: {:#}", err);
                None
            }
        }
    });

    join_all(lookups).await.into_iter().flatten().collect()
}

/// Fetch the variables an alias chain may reach that are not in `known`.
///
/// Runs in rounds: every round fetches the newly referenced ids as one batch,
/// until a round discovers nothing new. Each id is attempted once.
pub async fn fetch_alias_targets<S>(source: &S, known: &[Variable]) -> Vec<Variable>
where
    S: VariableSource + ?Sized,
{
    let mut attempted: HashSet<String> = known.iter().map(|v| v.id.clone()).collect();
    let mut fetched: Vec<Variable> = Vec::new();
    let mut frontier = alias_ids(known.iter(), &attempted);

    while !frontier.is_empty() {
        let ids: Vec<String> = frontier.into_iter().collect();
        attempted.extend(ids.iter().cloned());

        let found = fetch_variables(source, &ids).await;
        frontier = alias_ids(found.iter(), &attempted);
        fetched.extend(found);
    }

    fetched
}

fn alias_ids<'a>(
    variables: impl Iterator<Item = &'a Variable>,
    exclude: &HashSet<String>,
) -> BTreeSet<String> {
    variables
        .flat_map(|variable| variable.values_by_mode.values())
        .filter_map(VariableValue::as_alias)
        .filter(|alias| !exclude.contains(&alias.id))
        .map(|alias| alias.id.clone())
        .collect()
}

/// Fetch a collection's variables, the alias targets they reach and the
/// collection list.
pub async fn fetch_for_export<S>(source: &S, collection: &VariableCollection) -> FetchedVariables
where
    S: VariableSource + ?Sized,
{
    let members = fetch_variables(source, &collection.variable_ids).await;
    let referenced = fetch_alias_targets(source, &members).await;
    let collections = list_collections_or_empty(source).await;

    tracing::debug!(
        collection = %collection.name,
        requested = collection.variable_ids.len(),
        members = members.len(),
        referenced = referenced.len(),
        "fetched variables"
    );

    FetchedVariables {
        members,
        referenced,
        collections,
    }
}
