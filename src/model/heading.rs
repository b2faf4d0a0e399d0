//! Heading: the compass direction a rover faces.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::RoverError;

/// One of the four compass directions.
///
/// Variants are declared in turning order: a right turn moves to the
/// next variant, a left turn to the previous one, wrapping at the ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Heading {
    East,
    South,
    West,
    North,
}

impl Heading {
    /// All headings in right-turn order, starting from east.
    pub const ALL: [Heading; 4] = [Heading::East, Heading::South, Heading::West, Heading::North];

    /// The unit displacement of one forward move.
    ///
    /// A backward move uses the negated vector.
    pub fn forward_delta(self) -> (i64, i64) {
        match self {
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
            Heading::North => (0, 1),
        }
    }

    pub fn turn_right(self) -> Self {
        match self {
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
            Heading::North => Heading::East,
        }
    }

    pub fn turn_left(self) -> Self {
        match self {
            Heading::East => Heading::North,
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
        }
    }

    /// Position in [`Heading::ALL`].
    pub fn ordinal(self) -> u8 {
        match self {
            Heading::East => 0,
            Heading::South => 1,
            Heading::West => 2,
            Heading::North => 3,
        }
    }

    /// Canonical uppercase name, as rendered in rover output.
    pub fn name(self) -> &'static str {
        match self {
            Heading::East => "EAST",
            Heading::South => "SOUTH",
            Heading::West => "WEST",
            Heading::North => "NORTH",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heading {
    type Err = RoverError;

    /// Case-insensitive match against the canonical names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heading::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RoverError::UnknownHeading(s.to_string()))
    }
}

impl TryFrom<u8> for Heading {
    type Error = RoverError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Heading::ALL
            .get(usize::from(ordinal))
            .copied()
            .ok_or(RoverError::InvalidHeading(ordinal))
    }
}

impl TryFrom<String> for Heading {
    type Error = RoverError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Heading> for String {
    fn from(heading: Heading) -> Self {
        heading.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_right_turns_return_to_start() {
        for h in Heading::ALL {
            assert_eq!(h.turn_right().turn_right().turn_right().turn_right(), h);
        }
    }

    #[test]
    fn four_left_turns_return_to_start() {
        for h in Heading::ALL {
            assert_eq!(h.turn_left().turn_left().turn_left().turn_left(), h);
        }
    }

    #[test]
    fn left_undoes_right() {
        for h in Heading::ALL {
            assert_eq!(h.turn_right().turn_left(), h);
            assert_eq!(h.turn_left().turn_right(), h);
        }
    }

    #[test]
    fn right_follows_turning_order() {
        let cases = [
            (Heading::East, Heading::South),
            (Heading::South, Heading::West),
            (Heading::West, Heading::North),
            (Heading::North, Heading::East),
        ];
        for (from, to) in cases {
            assert_eq!(from.turn_right(), to);
        }
    }

    #[test]
    fn forward_deltas_are_unit_vectors() {
        let cases = [
            (Heading::East, (1, 0)),
            (Heading::South, (0, -1)),
            (Heading::West, (-1, 0)),
            (Heading::North, (0, 1)),
        ];
        for (h, delta) in cases {
            assert_eq!(h.forward_delta(), delta);
        }
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("EAST".parse::<Heading>().unwrap(), Heading::East);
        assert_eq!("south".parse::<Heading>().unwrap(), Heading::South);
        assert_eq!("WeSt".parse::<Heading>().unwrap(), Heading::West);
    }

    #[test]
    fn rejects_unknown_name() {
        let err = "UP".parse::<Heading>().unwrap_err();
        assert!(matches!(err, RoverError::UnknownHeading(ref s) if s == "UP"));
        assert_eq!(err.to_string(), "unknown heading: \"UP\"");
    }

    #[test]
    fn ordinals_round_trip() {
        for h in Heading::ALL {
            assert_eq!(Heading::try_from(h.ordinal()).unwrap(), h);
        }
    }

    #[test]
    fn rejects_out_of_range_ordinal() {
        let err = Heading::try_from(4).unwrap_err();
        assert!(matches!(err, RoverError::InvalidHeading(4)));
    }

    #[test]
    fn serializes_as_canonical_name() {
        let json = serde_json::to_string(&Heading::North).unwrap();
        assert_eq!(json, "\"NORTH\"");
        let back: Heading = serde_json::from_str("\"north\"").unwrap();
        assert_eq!(back, Heading::North);
    }
}
