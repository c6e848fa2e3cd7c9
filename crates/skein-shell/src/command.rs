//! Line parsing into typed shell commands.
//!
//! One line is one command: a keyword followed by at most two
//! whitespace-delimited arguments. Indices are parsed as signed
//! integers so that a negative index reaches the bounds check as a
//! negative number instead of wrapping; values are single opaque
//! tokens.

use std::error::Error;
use std::fmt;

use smallvec::SmallVec;

/// A parsed shell command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// List available commands.
    Help,
    /// Leave the shell.
    Exit,
    /// (Re)create an empty vector, freeing any current contents.
    Init,
    /// Report the vector's size.
    Size,
    /// Print the full vector contents.
    List,
    /// Overwrite the value at an existing index.
    Set {
        /// Target index, as typed (may be negative).
        index: i64,
        /// Replacement value.
        value: String,
    },
    /// Print the value at an index.
    Get {
        /// Target index, as typed (may be negative).
        index: i64,
    },
    /// Insert a value at an index, shifting later elements right.
    Insert {
        /// Insertion index, as typed (may be negative).
        index: i64,
        /// Value to insert.
        value: String,
    },
    /// Remove and print the value at an index.
    Remove {
        /// Target index, as typed (may be negative).
        index: i64,
    },
    /// Append a value at the end.
    Push {
        /// Value to append.
        value: String,
    },
    /// Remove and print the last value.
    Pop,
}

/// A line that could not be parsed into a [`Command`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Right keyword, wrong arguments.
    Usage {
        /// The expected form, shown to the user.
        usage: &'static str,
    },
    /// Unrecognised keyword.
    Unknown,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage { usage } => write!(f, "use format `{usage}`"),
            Self::Unknown => write!(f, "unknown command"),
        }
    }
}

impl Error for ParseError {}

/// Parse one input line.
///
/// Returns `Ok(None)` for a blank line, `Ok(Some(command))` for a
/// well-formed one, and a [`ParseError`] otherwise. Extra arguments are
/// a usage error, matching the strictest reading of each form.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    // Commands have at most three tokens; anything longer spills but
    // still parses far enough to report the right usage.
    let tokens: SmallVec<[&str; 3]> = line.split_whitespace().collect();
    let Some((&keyword, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match keyword {
        "help" => bare(args, "help", Command::Help)?,
        "exit" => bare(args, "exit", Command::Exit)?,
        "quit" => bare(args, "quit", Command::Exit)?,
        "q" => bare(args, "q", Command::Exit)?,
        "init" => bare(args, "init", Command::Init)?,
        "size" => bare(args, "size", Command::Size)?,
        "ls" => bare(args, "ls", Command::List)?,
        "print" => bare(args, "print", Command::List)?,
        "dump" => bare(args, "dump", Command::List)?,
        "pop" => bare(args, "pop", Command::Pop)?,
        "get" => Command::Get {
            index: indexed(args, "get <i>")?,
        },
        "remove" => Command::Remove {
            index: indexed(args, "remove <i>")?,
        },
        "push" => Command::Push {
            value: valued(args, "push <value>")?,
        },
        "set" => {
            let (index, value) = indexed_valued(args, "set <i> <value>")?;
            Command::Set { index, value }
        }
        "insert" => {
            let (index, value) = indexed_valued(args, "insert <i> <value>")?;
            Command::Insert { index, value }
        }
        _ => return Err(ParseError::Unknown),
    };
    Ok(Some(command))
}

/// A form that takes no arguments.
fn bare(args: &[&str], usage: &'static str, command: Command) -> Result<Command, ParseError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(ParseError::Usage { usage })
    }
}

/// A form that takes exactly one index argument.
fn indexed(args: &[&str], usage: &'static str) -> Result<i64, ParseError> {
    match args {
        [index] => index.parse().map_err(|_| ParseError::Usage { usage }),
        _ => Err(ParseError::Usage { usage }),
    }
}

/// A form that takes exactly one value argument.
fn valued(args: &[&str], usage: &'static str) -> Result<String, ParseError> {
    match args {
        [value] => Ok((*value).to_string()),
        _ => Err(ParseError::Usage { usage }),
    }
}

/// A form that takes an index and then a value.
fn indexed_valued(args: &[&str], usage: &'static str) -> Result<(i64, String), ParseError> {
    match args {
        [index, value] => {
            let index = index.parse().map_err(|_| ParseError::Usage { usage })?;
            Ok((index, (*value).to_string()))
        }
        _ => Err(ParseError::Usage { usage }),
    }
}
