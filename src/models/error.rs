//! Error types.
//!
//! [`ParseError`] covers malformed user input. Each variant renders the
//! fixed message shown back to the user, so callers never build their own.
//! [`AppError`] is what the binary surfaces for everything that is not a
//! parse failure.

use thiserror::Error;

use crate::logging::LoggingError;

/// A line of input that names a known command but does not carry the
/// fields that command needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseError {
    #[error("The description of a todo cannot be empty.")]
    EmptyDescription,

    #[error(
        "The description of the deadline is incomplete, \
         it should be in the format 'deadline <description> /by <time>'."
    )]
    MalformedDeadline,

    #[error(
        "The description of the event is incomplete, \
         it should be in the format 'event <description> /from <start> /to <end>'."
    )]
    MalformedEvent,

    #[error("Please use the format 'find <keyword>'.")]
    InvalidFindFormat,

    #[error("The index of a task cannot be empty.")]
    EmptyIndex,

    #[error("The index of a task has to be an integer.")]
    InvalidIndexFormat,

    /// The index parsed but is below 1, so there is no zero-based slot for it.
    #[error("The index of a task starts from 1.")]
    IndexOutOfRange,
}

impl ParseError {
    /// Stable name of the error kind, used in the history log.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ParseError::EmptyDescription => "EmptyDescription",
            ParseError::MalformedDeadline => "MalformedDeadline",
            ParseError::MalformedEvent => "MalformedEvent",
            ParseError::InvalidFindFormat => "InvalidFindFormat",
            ParseError::EmptyIndex => "EmptyIndex",
            ParseError::InvalidIndexFormat => "InvalidIndexFormat",
            ParseError::IndexOutOfRange => "IndexOutOfRange",
        }
    }
}

/// Top-level error for the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logging setup failed: {0}")]
    Logging(#[from] LoggingError),
}
