//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `collections`: List the collections in the variable snapshot
//! - `export`: Export one collection/mode as a token document
//! - `init`: Initialize varport configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::format::{ExportFormat, ValueFormat};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Collections(cmd)) => cmd.common.verbose,
            Some(Command::Export(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by commands reading the snapshot.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Variable snapshot file (overrides config file)
    #[arg(long, env = "VARPORT_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CollectionsCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Name of the collection to export
    #[arg(long, short)]
    pub collection: Option<String>,

    /// Name of the mode to export
    #[arg(long, short)]
    pub mode: Option<String>,

    /// Output format (overrides config file)
    #[arg(long, short, value_enum)]
    pub format: Option<ExportFormat>,

    /// How aliased values are written (overrides config file)
    #[arg(long, value_enum)]
    pub value_format: Option<ValueFormat>,

    /// Mode whose string values give the grouping path (minimizedSet only)
    #[arg(long)]
    pub structure_mode: Option<String>,

    /// Mode whose values are compared and emitted (minimizedSet only)
    #[arg(long)]
    pub value_mode: Option<String>,

    /// CSS rule selector (overrides config file)
    #[arg(long)]
    pub selector: Option<String>,

    /// Write the document to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List variable collections with their modes
    Collections(CollectionsCommand),
    /// Export a collection mode as design tokens
    Export(ExportCommand),
    /// Initialize a new .varportrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
