//! Position: a cell on the rover's grid.

use std::fmt;

use serde::Deserialize;

/// A cell on the unbounded integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "[i64; 2]")]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The cell reached by moving `steps` times along `(dx, dy)`.
    ///
    /// Negative `steps` moves against the vector. Returns `None` when the
    /// cell is past the range of `i64`.
    #[must_use]
    pub fn offset(self, (dx, dy): (i64, i64), steps: i64) -> Option<Self> {
        let x = dx.checked_mul(steps)?.checked_add(self.x)?;
        let y = dy.checked_mul(steps)?.checked_add(self.y)?;
        Some(Self { x, y })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<[i64; 2]> for Position {
    fn from([x, y]: [i64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Position {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}
