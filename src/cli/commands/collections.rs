use std::path::Path;

use anyhow::Result;

use super::super::args::CollectionsCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::print_collections;
use super::{Workspace, runtime};
use crate::source::VariableSource;

pub fn collections(cmd: CollectionsCommand, root: &Path) -> Result<ExitStatus> {
    let workspace = Workspace::load(root, &cmd.common)?;
    let collections = runtime()?.block_on(workspace.source.list_collections())?;

    tracing::debug!(
        snapshot = %workspace.snapshot_path.display(),
        count = collections.len(),
        "listing collections"
    );
    print_collections(&collections);

    Ok(ExitStatus::Success)
}
