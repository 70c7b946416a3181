use std::env;

use anyhow::{Context, Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{collections::collections, export::export, init::init},
    exit_status::ExitStatus,
};

/// Dispatch a parsed command. `serve` is handled by the binary before this.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    let root = env::current_dir().context("Failed to read current directory")?;

    match command {
        Some(Command::Collections(cmd)) => collections(cmd, &root),
        Some(Command::Export(cmd)) => export(cmd, &root),
        Some(Command::Init) => init(&root),
        Some(Command::Serve) => {
            bail!("Serve command should be handled before run()")
        }
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
