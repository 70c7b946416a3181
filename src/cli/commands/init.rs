use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::super::exit_status::ExitStatus;
use super::super::report::print_created;
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write the default configuration into `root`. An existing file is kept.
pub fn init(root: &Path) -> Result<ExitStatus> {
    let config_path = root.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
        return Ok(ExitStatus::Failure);
    }

    fs::write(&config_path, default_config_json()? + "\n")
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    print_created(CONFIG_FILE_NAME);

    Ok(ExitStatus::Success)
}
