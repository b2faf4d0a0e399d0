//! A rover on an unbounded integer grid.
//!
//! A [`Rover`] lands at a position facing one of four headings, then
//! runs command strings of `F`, `B`, `L`, and `R`. A move that would land
//! on an obstacle is discarded and the rover reports itself stopped.
//!
//! ```
//! use rover::Rover;
//!
//! let mut rover = Rover::new("(4, 2, EAST)", None)?;
//! rover.set_obstacles("[[1,4], [3,5], [7,4], [6,5]]")?;
//! rover.execute("FLFFFRFLB")?;
//! assert_eq!(rover.output(), "(5, 5) EAST STOPPED");
//! # Ok::<(), rover::RoverError>(())
//! ```

mod error;
mod mission;
mod model;
mod rover;

pub use error::{Result, RoverError};
pub use mission::{Mission, MissionError};
pub use model::{Command, Heading, Obstacles, Position};
pub use rover::Rover;
