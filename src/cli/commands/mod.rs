pub mod collections;
pub mod export;
pub mod init;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::runtime::Runtime;

use super::args::CommonArgs;
use crate::config::{Config, load_config};
use crate::source::SnapshotSource;

/// Configuration and snapshot shared by the commands that read variables.
pub(crate) struct Workspace {
    pub config: Config,
    pub source: SnapshotSource,
    pub snapshot_path: PathBuf,
}

impl Workspace {
    pub fn load(root: &Path, common: &CommonArgs) -> Result<Self> {
        let config = load_config(root)?.config;
        let snapshot_path = common
            .snapshot
            .clone()
            .unwrap_or_else(|| config.snapshot_path(root));
        let source = SnapshotSource::load(&snapshot_path)?;

        Ok(Self {
            config,
            source,
            snapshot_path,
        })
    }
}

/// Single-threaded runtime driving the async engine from a sync command.
pub(crate) fn runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}
