//! Obstacle sets: grid cells a rover may not enter.

use std::collections::HashSet;

use serde::Deserialize;

use super::Position;
use crate::error::Result;

/// A set of blocked cells.
///
/// Deserialized from a list of `[x, y]` pairs. Duplicate pairs collapse
/// into one cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<Position>")]
pub struct Obstacles {
    cells: HashSet<Position>,
}

impl Obstacles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a JSON list of integer pairs, e.g. `[[1,4], [3,5]]`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl From<Vec<Position>> for Obstacles {
    fn from(cells: Vec<Position>) -> Self {
        cells.into_iter().collect()
    }
}

impl<P: Into<Position>> FromIterator<P> for Obstacles {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(Into::into).collect(),
        }
    }
}
