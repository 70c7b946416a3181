use std::process::ExitCode;

use clap::Parser;
use varport::cli::{Arguments, Command, ExitStatus, init_logging};

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logging(args.verbose());

    if matches!(args.command, Some(Command::Serve)) {
        if let Err(err) = varport::mcp::run_server() {
            eprintln!("Error: {:#}", err);
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    match varport::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
