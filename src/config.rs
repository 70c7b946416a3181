use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::export::DEFAULT_SELECTOR;
use crate::format::{ExportFormat, ValueFormat};

pub const CONFIG_FILE_NAME: &str = ".varportrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_snapshot")]
    pub snapshot: String,
    #[serde(default = "default_format")]
    pub format: ExportFormat,
    #[serde(default)]
    pub value_format: ValueFormat,
    #[serde(default = "default_selector")]
    pub selector: String,
}

fn default_snapshot() -> String {
    "./variables.json".to_string()
}

fn default_format() -> ExportFormat {
    ExportFormat::CssVar
}

fn default_selector() -> String {
    DEFAULT_SELECTOR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot: default_snapshot(),
            format: default_format(),
            value_format: ValueFormat::default(),
            selector: default_selector(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.selector.trim().is_empty() {
            bail!("Invalid 'selector' in {}: must not be empty", CONFIG_FILE_NAME);
        }
        if self.snapshot.trim().is_empty() {
            bail!("Invalid 'snapshot' in {}: must not be empty", CONFIG_FILE_NAME);
        }
        Ok(())
    }

    /// Snapshot path, relative paths taken from `root`.
    pub fn snapshot_path(&self, root: &Path) -> PathBuf {
        root.join(&self.snapshot)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
