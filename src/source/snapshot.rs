use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::VariableSource;
use crate::model::{Variable, VariableCollection};

/// Variable store backed by an exported JSON snapshot.
///
/// Accepts the host's local-variables response (`{"meta": {...}}`) or its
/// `meta` object on its own. Collections are listed in id order.
///
/// Entries that do not parse are dropped with a warning, so they read as
/// absent like any other failed lookup.
#[derive(Debug, Clone, Default)]
pub struct SnapshotSource {
    collections: BTreeMap<String, VariableCollection>,
    variables: HashMap<String, Variable>,
}

impl SnapshotSource {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot file: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse snapshot file: {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let file: Value =
            serde_json::from_str(content).context("Snapshot is not valid JSON")?;
        let Value::Object(mut file) = file else {
            bail!("Expected a local variables snapshot object");
        };

        let meta = match file.remove("meta") {
            Some(Value::Object(meta)) => meta,
            Some(_) => bail!("Expected `meta` to be an object"),
            None => file,
        };

        Ok(Self {
            collections: entries(&meta, "variableCollections")?,
            variables: entries(&meta, "variables")?,
        })
    }

    pub fn collection(&self, id: &str) -> Option<&VariableCollection> {
        self.collections.get(id)
    }

    pub fn collection_by_name(&self, name: &str) -> Option<&VariableCollection> {
        self.collections.values().find(|c| c.name == name)
    }
}

fn entries<C, T>(meta: &Map<String, Value>, key: &str) -> Result<C>
where
    C: FromIterator<(String, T)>,
    T: DeserializeOwned,
{
    let entries = match meta.get(key) {
        Some(Value::Object(entries)) => entries,
        Some(_) => bail!("Expected `{}` to be an object", key),
        None => return Ok(std::iter::empty().collect()),
    };

    Ok(entries
        .iter()
        .filter_map(|(id, entry)| match T::deserialize(entry) {
            Ok(parsed) => Some((id.clone(), parsed)),
            Err(e) => {
                tracing::warn!(id = %id, "dropping unreadable {} entry: {}", key, e);
                None
            }
        })
        .collect())
}

#[async_trait]
impl VariableSource for SnapshotSource {
    async fn list_collections(&self) -> Result<Vec<VariableCollection>> {
        Ok(self.collections.values().cloned().collect())
    }

    async fn collection_by_id(&self, id: &str) -> Result<Option<VariableCollection>> {
        Ok(self.collections.get(id).cloned())
    }

    async fn variable_by_id(&self, id: &str) -> Result<Option<Variable>> {
        Ok(self.variables.get(id).cloned())
    }
}
