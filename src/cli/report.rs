//! Report formatting and printing utilities.
//!
//! Token documents go to stdout; everything in this module is either a
//! listing the user asked for (stdout) or a status line (stderr).

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::document::ExportOutput;
use crate::export::ExportError;
use crate::model::VariableCollection;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the line confirming a created file.
pub fn print_created(file_name: &str) {
    let _ = writeln!(
        io::stdout().lock(),
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", file_name).green()
    );
}

/// Print the notice of an aborted export to stderr.
pub fn print_notice(err: &ExportError) {
    print_notice_to(err, &mut io::stderr().lock());
}

pub fn print_notice_to<W: Write>(err: &ExportError, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), err.to_string().red());
}

/// Print the success notice and skipped entries of an export to stderr.
pub fn print_exported(output: &ExportOutput, destination: Option<&Path>, verbose: bool) {
    print_exported_to(output, destination, verbose, &mut io::stderr().lock());
}

pub fn print_exported_to<W: Write>(
    output: &ExportOutput,
    destination: Option<&Path>,
    verbose: bool,
    writer: &mut W,
) {
    let notice = match destination {
        Some(path) => format!("{} Written to {}", output.notice(), path.display()),
        None => output.notice(),
    };
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), notice.green());

    if output.skipped.is_empty() {
        return;
    }

    if verbose {
        for skipped in &output.skipped {
            let _ = writeln!(writer, "{} skipped {}", "warning:".bold().yellow(), skipped);
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} variable(s) could not be resolved (use {} for details)",
            "warning:".bold().yellow(),
            output.skipped.len(),
            "-v".cyan()
        );
    }
}

/// Print collections with their modes and variable counts to stdout.
pub fn print_collections(collections: &[VariableCollection]) {
    print_collections_to(collections, &mut io::stdout().lock());
}

pub fn print_collections_to<W: Write>(collections: &[VariableCollection], writer: &mut W) {
    if collections.is_empty() {
        let _ = writeln!(writer, "No variable collections found");
        return;
    }

    for collection in collections {
        let count = collection.variable_ids.len();
        let _ = writeln!(
            writer,
            "{} ({} {})",
            collection.name.bold(),
            count,
            if count == 1 { "variable" } else { "variables" }
        );
        for mode in &collection.modes {
            if mode.mode_id == collection.default_mode_id {
                let _ = writeln!(writer, "  - {} {}", mode.name, "(default)".dimmed());
            } else {
                let _ = writeln!(writer, "  - {}", mode.name);
            }
        }
    }
}
