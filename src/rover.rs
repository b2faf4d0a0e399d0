//! The rover state machine.
//!
//! A rover holds its committed position and heading, a stopped flag,
//! and the obstacles it must avoid. Commands are applied to a candidate
//! copy of the state one at a time; each candidate is committed only if
//! it does not land on an obstacle.

use std::fmt;

use tracing::{debug, info};

use crate::error::{Result, RoverError};
use crate::model::{Command, Heading, Obstacles, Position};

/// A rover on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rover {
    position: Position,
    heading: Heading,
    stopped: bool,
    obstacles: Obstacles,
}

impl Rover {
    /// Lands a rover from a `"(x, y, HEADING)"` literal.
    ///
    /// Fields are comma separated and trimmed; the heading is matched
    /// case-insensitively. A missing obstacle set means an empty one.
    pub fn new(landing: &str, obstacles: Option<Obstacles>) -> Result<Self> {
        let (position, heading) = parse_landing(landing)?;
        Ok(Self {
            position,
            heading,
            stopped: false,
            obstacles: obstacles.unwrap_or_default(),
        })
    }

    /// Lands a rover at a known position with no obstacles.
    pub fn landed(position: Position, heading: Heading) -> Self {
        Self {
            position,
            heading,
            stopped: false,
            obstacles: Obstacles::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn obstacles(&self) -> &Obstacles {
        &self.obstacles
    }

    /// Overwrites the heading. Position and stopped flag are untouched.
    pub fn set_direction(&mut self, heading: Heading) {
        self.heading = heading;
    }

    /// Replaces the obstacle set from a JSON list of pairs.
    ///
    /// The current set is kept if the JSON cannot be decoded. The stopped
    /// flag is not re-evaluated against the new set.
    pub fn set_obstacles(&mut self, json: &str) -> Result<()> {
        let obstacles = Obstacles::from_json(json)?;
        self.replace_obstacles(obstacles);
        Ok(())
    }

    pub fn replace_obstacles(&mut self, obstacles: Obstacles) {
        debug!(count = obstacles.len(), "replaced obstacles");
        self.obstacles = obstacles;
    }

    /// Executes a command string.
    ///
    /// The string is validated before anything moves, so an unknown
    /// symbol leaves the rover exactly as it was. Commands then run in
    /// order until one would land on an obstacle: that command is
    /// discarded, the rover is marked stopped, and the rest of the
    /// string is abandoned. Every committed command clears the stopped
    /// flag.
    ///
    /// A move past the edge of the grid fails the whole call, again
    /// leaving the rover as it was.
    pub fn execute(&mut self, commands: &str) -> Result<()> {
        let mut position = self.position;
        let mut heading = self.heading;
        let mut stopped = self.stopped;

        for command in Command::parse_all(commands)? {
            let (next, turned) = candidate(position, heading, command)?;

            if self.obstacles.contains(next) {
                info!(%command, x = next.x, y = next.y, "obstacle ahead, rover stopped");
                stopped = true;
                break;
            }

            position = next;
            heading = turned;
            stopped = false;
            debug!(%command, x = next.x, y = next.y, %heading, "applied command");
        }

        self.position = position;
        self.heading = heading;
        self.stopped = stopped;
        Ok(())
    }

    /// Renders `"(x, y) HEADING"`, suffixed with `" STOPPED"` when stopped.
    pub fn output(&self) -> String {
        self.to_string()
    }
}

/// The state reached by applying `command` from `position` facing `heading`.
fn candidate(
    position: Position,
    heading: Heading,
    command: Command,
) -> Result<(Position, Heading)> {
    let steps = match command {
        Command::Forward => 1,
        Command::Backward => -1,
        Command::Left => return Ok((position, heading.turn_left())),
        Command::Right => return Ok((position, heading.turn_right())),
    };
    let Some(next) = position.offset(heading.forward_delta(), steps) else {
        return Err(RoverError::OffGrid {
            command,
            from: position,
        });
    };
    Ok((next, heading))
}

impl fmt::Display for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.position, self.heading)?;
        if self.stopped {
            f.write_str(" STOPPED")?;
        }
        Ok(())
    }
}

const LANDING_SHAPE: &str = "expected \"(x, y, HEADING)\"";

/// Splits a landing literal into its position and heading.
fn parse_landing(landing: &str) -> Result<(Position, Heading)> {
    let inner = landing
        .trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| invalid("literal", landing, LANDING_SHAPE))?;

    let fields: Vec<&str> = inner.split(',').map(str::trim).collect();
    let &[x, y, heading] = fields.as_slice() else {
        let reason = format!("expected 3 fields, found {}", fields.len());
        return Err(invalid("literal", landing, reason));
    };

    let x = x.parse::<i64>().map_err(|e| invalid("x", x, e))?;
    let y = y.parse::<i64>().map_err(|e| invalid("y", y, e))?;
    let heading = heading
        .parse::<Heading>()
        .map_err(|e| invalid("heading", heading, e))?;

    Ok((Position::new(x, y), heading))
}

fn invalid(field: &'static str, input: &str, reason: impl ToString) -> RoverError {
    RoverError::InvalidInitialization {
        field,
        input: input.to_string(),
        reason: reason.to_string(),
    }
}
