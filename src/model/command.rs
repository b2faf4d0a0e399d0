//! Commands: the four symbols a rover understands.

use std::fmt;

use crate::error::{Result, RoverError};

/// A single rover command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `F`: move one cell along the heading.
    Forward,

    /// `B`: move one cell against the heading.
    Backward,

    /// `L`: turn left in place.
    Left,

    /// `R`: turn right in place.
    Right,
}

impl Command {
    /// Parses a whole command string.
    ///
    /// Fails on the first unrecognized symbol, reporting its 0-based
    /// character index. Symbols are case-sensitive.
    pub fn parse_all(commands: &str) -> Result<Vec<Command>> {
        commands
            .chars()
            .enumerate()
            .map(|(position, symbol)| match Command::from_symbol(symbol) {
                Some(command) => Ok(command),
                None => Err(RoverError::InvalidCommand { symbol, position }),
            })
            .collect()
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'F' => Some(Command::Forward),
            'B' => Some(Command::Backward),
            'L' => Some(Command::Left),
            'R' => Some(Command::Right),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Command::Forward => 'F',
            Command::Backward => 'B',
            Command::Left => 'L',
            Command::Right => 'R',
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
