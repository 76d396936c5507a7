//! Compass directions and rotations.
//!
//! Directions form a closed cycle in clockwise order:
//! `North -> East -> South -> West -> North`. Rotating right steps one place
//! clockwise, rotating left steps one place counter-clockwise.

use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four cardinal directions the robot can face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in clockwise order, starting at north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Position of this direction in the clockwise cycle.
    pub fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Step `delta` places around the cycle (positive is clockwise).
    ///
    /// # Example
    ///
    /// ```rust
    /// use toy_robot::core::Direction;
    ///
    /// assert_eq!(Direction::North.rotate(-1), Direction::West);
    /// assert_eq!(Direction::West.rotate(1), Direction::North);
    /// ```
    pub fn rotate(self, delta: i32) -> Self {
        let index = (self.index() as i32 + delta).rem_euclid(4);
        Self::ALL[index as usize]
    }

    /// Upper-case name, as written in commands.
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }

    /// Capitalised name used in reports and wall names ("North").
    pub fn capitalised(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
        }
    }

    /// Parse a direction name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDirection`] for anything other than
    /// the four direction names.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let upper = text.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|direction| direction.name() == upper)
            .ok_or_else(|| ValidationError::InvalidDirection {
                input: text.to_string(),
            })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A quarter turn in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rotation {
    Left,
    Right,
}

impl Rotation {
    /// Step applied to a [`Direction`] index.
    pub fn delta(self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }

    /// Lower-case name, as used in "Rotated left".
    pub fn lowercase(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Parse `LEFT` or `RIGHT`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidRotation`] for any other word.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        match text.trim().to_uppercase().as_str() {
            "LEFT" => Ok(Self::Left),
            "RIGHT" => Ok(Self::Right),
            _ => Err(ValidationError::InvalidRotation {
                input: text.to_string(),
            }),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("LEFT"),
            Self::Right => f.write_str("RIGHT"),
        }
    }
}

impl FromStr for Rotation {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_rotation_follows_clockwise_order() {
        assert_eq!(Direction::North.rotate(1), Direction::East);
        assert_eq!(Direction::East.rotate(1), Direction::South);
        assert_eq!(Direction::South.rotate(1), Direction::West);
        assert_eq!(Direction::West.rotate(1), Direction::North);
    }

    #[test]
    fn left_rotation_wraps_below_north() {
        assert_eq!(Direction::North.rotate(-1), Direction::West);
        assert_eq!(Direction::East.rotate(-1), Direction::North);
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!(Direction::parse("south"), Ok(Direction::South));
        assert_eq!(Direction::parse("EaSt"), Ok(Direction::East));
        assert_eq!("west".parse::<Direction>(), Ok(Direction::West));
    }

    #[test]
    fn parse_rejects_unknown_direction() {
        let err = Direction::parse("UP").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDirection { .. }));
        assert_eq!(err.to_string(), "Direction must be in allowed list");
    }

    #[test]
    fn rotation_parse_accepts_only_left_and_right() {
        assert_eq!(Rotation::parse("left"), Ok(Rotation::Left));
        assert_eq!(Rotation::parse("RIGHT"), Ok(Rotation::Right));
        assert!(matches!(
            Rotation::parse("UP"),
            Err(ValidationError::InvalidRotation { .. })
        ));
    }

    #[test]
    fn direction_serializes_as_upper_case_name() {
        let json = serde_json::to_string(&Direction::North).unwrap();
        assert_eq!(json, "\"NORTH\"");
        let back: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Direction::North);
    }
}
