use thiserror::Error;

use crate::exitcode;

/// Errors are the top-level failure taxonomy of the harness.
/// Every kind is fatal to the current invocation; nothing is retried.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Malformed or unrecognized CLI flags (surfaced by the parser).
    #[error("{0}")]
    Usage(String),

    /// Flags parsed but could not be turned into a valid request.
    #[error("cannot build request: {0}")]
    RequestBuild(String),

    /// The bound operation failed while the command executed.
    #[error("'{command}' failed: {reason}")]
    Execution { command: String, reason: String },

    /// A render hook asked for a response key the variant never populates.
    /// This is a variant/harness mismatch bug, not a user input error.
    #[error("response field not populated: {0}")]
    MissingField(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

pub type CommandResult<T> = Result<T, CommandError>;

impl CommandError {
    /// Get the appropriate exit code for this error.
    ///
    /// Usage and request-build failures exit 1 after the usage text has
    /// been shown; execution and mismatch failures propagate as internal
    /// software errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::Usage(_)
            | CommandError::RequestBuild(_)
            | CommandError::UnknownCommand(_) => exitcode::USAGE,
            CommandError::Execution { .. } | CommandError::MissingField(_) => exitcode::SOFTWARE,
        }
    }
}
