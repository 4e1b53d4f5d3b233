//! Error types for the cache shell
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Command Error Enum ==
/// Errors produced while parsing an input line.
///
/// All variants are non-fatal: the parser renders them into
/// [`Command::Invalid`](crate::command::Command::Invalid) and the shell loop
/// continues.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Wrong number of arguments for a known command
    #[error("'{command}' takes {expected} argument(s), got {got}")]
    BadArity {
        command: &'static str,
        expected: usize,
        got: usize,
    },

    /// Argument to fill that does not parse as an integer
    #[error("'{value}' is not a number: {source}")]
    NotANumber {
        value: String,
        source: std::num::ParseIntError,
    },

    /// Input line whose first token is not a known command
    #[error("unknown command: '{0}'")]
    UnknownCommand(String),
}

// == Result Type Alias ==
/// Convenience Result type for command parsing.
pub type Result<T> = std::result::Result<T, CommandError>;
