//! Command-line interface: argument parsing, commands and terminal output.

mod args;
mod commands;
mod exit_status;
mod logging;
mod report;
mod run;

use anyhow::Result;

pub use args::{Arguments, CollectionsCommand, Command, CommonArgs, ExportCommand};
pub use exit_status::ExitStatus;
pub use logging::{LOG_ENV, init_logging};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(args)
}
