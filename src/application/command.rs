//! Command language: one command per line
//!
//! ```text
//! CREATE <path>
//! DELETE <path>
//! MOVE <fromPath> <toPath>
//! LIST
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::application::ParseError;
use crate::domain::NodePath;

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create(NodePath),
    Delete(NodePath),
    Move { from: NodePath, to: NodePath },
    List,
}

impl Command {
    pub const CREATE: &'static str = "CREATE";
    pub const DELETE: &'static str = "DELETE";
    pub const MOVE: &'static str = "MOVE";
    pub const LIST: &'static str = "LIST";

    /// Parse a single line.
    ///
    /// Tokens are whitespace separated and keywords are case-sensitive.
    /// Surplus tokens are ignored.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().unwrap_or_default();

        let command = match keyword {
            Self::CREATE => Command::Create(required(&mut tokens, Self::CREATE, "path")?),
            Self::DELETE => Command::Delete(required(&mut tokens, Self::DELETE, "path")?),
            Self::MOVE => Command::Move {
                from: required(&mut tokens, Self::MOVE, "source path")?,
                to: required(&mut tokens, Self::MOVE, "destination path")?,
            },
            Self::LIST => Command::List,
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        };

        let surplus: Vec<&str> = tokens.collect();
        if !surplus.is_empty() {
            warn!("{}: ignoring extra arguments {:?}", keyword, surplus);
        }
        Ok(command)
    }

    /// Verb used in failure messages: `Cannot <action> <path> - <reason>`.
    pub fn action(&self) -> &'static str {
        match self {
            Command::Create(_) => "create",
            Command::Delete(_) => "delete",
            Command::Move { .. } => "move",
            Command::List => "list",
        }
    }

    /// The path a failure message refers to (the source for MOVE).
    pub fn subject(&self) -> Option<&NodePath> {
        match self {
            Command::Create(path) | Command::Delete(path) => Some(path),
            Command::Move { from, .. } => Some(from),
            Command::List => None,
        }
    }
}

fn required<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<NodePath, ParseError> {
    tokens
        .next()
        .map(NodePath::parse)
        .ok_or(ParseError::MissingArgument { command, argument })
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Create(path) => write!(f, "{} {}", Self::CREATE, path),
            Command::Delete(path) => write!(f, "{} {}", Self::DELETE, path),
            Command::Move { from, to } => write!(f, "{} {} {}", Self::MOVE, from, to),
            Command::List => write!(f, "{}", Self::LIST),
        }
    }
}
