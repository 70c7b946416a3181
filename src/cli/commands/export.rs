use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::super::args::ExportCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_exported, print_notice};
use super::{Workspace, runtime};
use crate::config::Config;
use crate::export::{ExportRequest, run_export};
use crate::minimize::MinimizedSetOptions;
use crate::model::{Mode, VariableCollection};
use crate::source::SnapshotSource;

pub fn export(cmd: ExportCommand, root: &Path) -> Result<ExitStatus> {
    let workspace = Workspace::load(root, &cmd.common)?;
    let request = build_request(&cmd, &workspace.config, &workspace.source);

    let output = match runtime()?.block_on(run_export(&workspace.source, &request)) {
        Ok(output) => output,
        Err(err) => {
            tracing::debug!(format = %request.format, "export aborted: {}", err);
            print_notice(&err);
            return Ok(ExitStatus::Failure);
        }
    };

    let rendered = output.render();
    match &cmd.output {
        Some(path) => fs::write(path, format!("{}\n", rendered))
            .with_context(|| format!("Failed to write output file: {}", path.display()))?,
        None => println!("{}", rendered),
    }

    print_exported(&output, cmd.output.as_deref(), cmd.common.verbose);
    Ok(ExitStatus::Success)
}

/// Turn names given on the command line into a request. A collection may
/// also be given by id. Names that match nothing leave the selection empty,
/// which the export reports.
fn build_request(cmd: &ExportCommand, config: &Config, source: &SnapshotSource) -> ExportRequest {
    let collection = cmd
        .collection
        .as_deref()
        .and_then(|name| {
            source
                .collection_by_name(name)
                .or_else(|| source.collection(name))
        })
        .cloned();
    let mode = lookup_mode(collection.as_ref(), cmd.mode.as_deref());

    let minimized = MinimizedSetOptions {
        structure_mode: lookup_mode(collection.as_ref(), cmd.structure_mode.as_deref()),
        value_mode: lookup_mode(collection.as_ref(), cmd.value_mode.as_deref()),
    };

    ExportRequest {
        collection,
        mode,
        format: cmd.format.unwrap_or(config.format),
        value_format: cmd.value_format.unwrap_or(config.value_format),
        minimized: Some(minimized),
        selector: cmd
            .selector
            .clone()
            .unwrap_or_else(|| config.selector.clone()),
    }
}

fn lookup_mode(collection: Option<&VariableCollection>, name: Option<&str>) -> Option<Mode> {
    let collection = collection?;
    let name = name?;
    let mode = collection.mode_by_name(name).cloned();
    if mode.is_none() {
        tracing::debug!(collection = %collection.name, mode = name, "mode not found");
    }
    mode
}
