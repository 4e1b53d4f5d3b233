//! Command Parser Module
//!
//! Turns one raw input line into a validated [`Command`] variant.

use crate::error::{CommandError, Result};

// == Command ==
/// A parsed, validated user instruction ready for execution.
///
/// Constructed fresh per input line and immutable once parsed. Malformed
/// input resolves to [`Command::Invalid`] rather than an error, so parsing
/// is total over all input lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the command reference
    Help,
    /// Insert or overwrite an entry
    Put { key: String, value: String },
    /// Retrieve an entry
    Get { key: String },
    /// Remove an entry
    Remove { key: String },
    /// List all locally held keys
    List,
    /// Count locally held entries
    Size,
    /// Print hit/miss statistics
    Stats,
    /// Bulk-generate synthetic entries
    Fill { count: i64, bytes: i64 },
    /// Shut down the store and terminate
    Exit,
    /// Anything that failed to parse, with a human-readable reason
    Invalid { reason: String },
}

impl Command {
    /// Every recognized command name, used for tab completion.
    pub const NAMES: &'static [&'static str] = &[
        "help", "put", "get", "remove", "list", "size", "stats", "fill", "exit",
    ];

    // == Parse ==
    /// Parses a raw input line, already trimmed of surrounding whitespace.
    ///
    /// Splits on single-space boundaries; consecutive spaces produce empty
    /// tokens. This mirrors the literal splitting policy of the console
    /// protocol, so keys and values cannot contain spaces. The first token is
    /// the command name, the rest are positional arguments.
    pub fn parse(line: &str) -> Command {
        match Self::try_parse(line) {
            Ok(command) => command,
            Err(err) => Command::Invalid {
                reason: err.to_string(),
            },
        }
    }

    fn try_parse(line: &str) -> Result<Command> {
        let mut tokens = line.split(' ');
        // split always yields at least one token, empty for an empty line
        let name = tokens.next().unwrap_or_default();
        let args: Vec<&str> = tokens.collect();

        match name {
            "help" => Ok(Command::Help),
            "put" => {
                expect_arity("put", &args, 2)?;
                Ok(Command::Put {
                    key: args[0].to_string(),
                    value: args[1].to_string(),
                })
            }
            "get" => {
                expect_arity("get", &args, 1)?;
                Ok(Command::Get {
                    key: args[0].to_string(),
                })
            }
            "remove" => {
                expect_arity("remove", &args, 1)?;
                Ok(Command::Remove {
                    key: args[0].to_string(),
                })
            }
            "list" => Ok(Command::List),
            "size" => Ok(Command::Size),
            "stats" => Ok(Command::Stats),
            "fill" => {
                expect_arity("fill", &args, 2)?;
                Ok(Command::Fill {
                    count: parse_int(args[0])?,
                    bytes: parse_int(args[1])?,
                })
            }
            "exit" => Ok(Command::Exit),
            _ => Err(CommandError::UnknownCommand(line.to_string())),
        }
    }
}

// == Arity Check ==
/// Validates the exact argument count for commands that require one.
///
/// Zero-argument commands skip this check entirely: extra arguments to
/// `help`, `list`, `size`, `stats`, and `exit` are ignored.
fn expect_arity(command: &'static str, args: &[&str], expected: usize) -> Result<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(CommandError::BadArity {
            command,
            expected,
            got: args.len(),
        })
    }
}

// == Integer Argument ==
fn parse_int(value: &str) -> Result<i64> {
    value.parse().map_err(|source| CommandError::NotANumber {
        value: value.to_string(),
        source,
    })
}
