//! Errors raised while landing, steering, or driving a rover.

use crate::model::{Command, Position};

/// Errors that can occur while building or driving a rover.
#[derive(Debug, thiserror::Error)]
pub enum RoverError {
    /// The landing literal could not be decoded.
    ///
    /// `field` names the part that failed: `literal`, `x`, `y`, or `heading`.
    #[error("invalid initialization {field}: {input:?}: {reason}")]
    InvalidInitialization {
        field: &'static str,
        input: String,
        reason: String,
    },

    #[error("unknown heading: {0:?}")]
    UnknownHeading(String),

    #[error("invalid obstacle spec: {0}")]
    InvalidObstacleSpec(#[from] serde_json::Error),

    /// `position` is the 0-based character index in the command string.
    #[error("invalid command {symbol:?} at position {position}")]
    InvalidCommand { symbol: char, position: usize },

    /// The move would step past the range of `i64`.
    #[error("command {command} from {from} would leave the grid")]
    OffGrid { command: Command, from: Position },

    #[error("invalid heading ordinal: {0}")]
    InvalidHeading(u8),
}

pub type Result<T> = core::result::Result<T, RoverError>;
