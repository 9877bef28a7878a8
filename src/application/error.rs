//! Application-level errors

use thiserror::Error;

/// A command line that cannot be turned into a [`Command`](crate::application::Command).
///
/// Only [`ParseError::UnknownCommand`] stops a batch. A missing operand is
/// reported on its line like a failed operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid command: '{0}'")]
    UnknownCommand(String),

    #[error("{command}: missing {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
}

/// Application errors: batch-stopping parse errors, config and output failures.
///
/// Domain errors never appear here, the interpreter reports them per line.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("cannot write output: {context}")]
    Output {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
