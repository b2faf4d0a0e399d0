//! Grid model for the rover.
//!
//! Headings, positions, obstacle sets, and the commands that move
//! a rover between them. Everything here is a plain value; the
//! state machine that owns them lives in [`crate::rover`].

mod command;
mod heading;
mod obstacles;
mod position;

pub use command::Command;
pub use heading::Heading;
pub use obstacles::Obstacles;
pub use position::Position;
