//! Mission plans.
//!
//! A mission is a small TOML document describing where a rover lands,
//! what it must avoid, and the command batches it runs:
//!
//! ```toml
//! landing = "(4, 2, EAST)"
//! obstacles = [[1, 4], [3, 5], [7, 4], [6, 5]]
//! commands = ["FLF", "FFRFLB"]
//! ```

use std::{fs, io, path::Path, path::PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::RoverError;
use crate::model::Obstacles;
use crate::rover::Rover;

/// Errors that can occur while loading a mission.
#[derive(Debug, thiserror::Error)]
pub enum MissionError {
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid mission: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Rover(#[from] RoverError),
}

/// A landing, its obstacles, and the command batches to run.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Mission {
    /// The `"(x, y, HEADING)"` landing literal.
    pub landing: String,

    #[serde(default)]
    pub obstacles: Obstacles,

    /// Each batch is one `execute` call.
    #[serde(default)]
    pub commands: Vec<String>,
}

impl Mission {
    pub fn from_toml(contents: &str) -> Result<Self, MissionError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load a mission from a TOML file.
    pub fn load(path: &Path) -> Result<Self, MissionError> {
        let contents = fs::read_to_string(path).map_err(|source| MissionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded mission");
        Self::from_toml(&contents)
    }

    /// Land the rover described by this mission without moving it.
    pub fn launch(&self) -> Result<Rover, RoverError> {
        Rover::new(&self.landing, Some(self.obstacles.clone()))
    }

    /// Launch and run every batch, collecting the rover's output after each.
    ///
    /// The first failing batch aborts the flight.
    pub fn fly(&self) -> Result<Vec<String>, RoverError> {
        let mut rover = self.launch()?;
        self.commands
            .iter()
            .map(|batch| {
                rover.execute(batch)?;
                Ok(rover.output())
            })
            .collect()
    }

    /// Load a mission file and fly it.
    pub fn fly_file(path: &Path) -> Result<Vec<String>, MissionError> {
        Ok(Self::load(path)?.fly()?)
    }
}
