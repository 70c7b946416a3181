use std::process::ExitCode;

/// Process exit status of a varport command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The command did what was asked.
    Success,
    /// The export was aborted with a notice (nothing selected, collection
    /// gone, minimizer modes unset), or `init` found an existing file.
    Failure,
    /// Internal error: unreadable config or snapshot, IO failure.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
