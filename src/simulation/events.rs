//! Values returned by simulation operations.
//!
//! A view renders these; the simulation itself never writes output.

use crate::core::{Direction, Rotation};
use crate::report::{self, PositionSnapshot};
use crate::validation::ValidationErrors;
use serde::{Deserialize, Serialize};

/// The robot was placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedEvent {
    pub position: PositionSnapshot,
}

impl PlacedEvent {
    pub fn message(&self) -> &'static str {
        "Placed"
    }
}

/// The robot moved forward, possibly stopped by a wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub position: PositionSnapshot,
    pub collided: bool,
    /// Wall that was hit, present exactly when `collided` is set.
    pub wall: Option<Direction>,
}

impl MoveResult {
    pub fn message(&self) -> &'static str {
        "Moved forward"
    }

    /// Collision warning to show alongside the report.
    pub fn warning(&self) -> Option<String> {
        self.wall.map(report::collision_warning)
    }
}

/// The robot turned in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotatedEvent {
    pub rotation: Rotation,
    pub position: PositionSnapshot,
}

impl RotatedEvent {
    pub fn message(&self) -> String {
        format!("Rotated {}", self.rotation.lowercase())
    }
}

/// Result of dispatching one [`Command`](crate::command::Command).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Placed(PlacedEvent),
    Moved(MoveResult),
    Rotated(RotatedEvent),
    Reported { position: PositionSnapshot },
    Rejected { errors: ValidationErrors },
}

impl Outcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Position after the command, unless it was rejected.
    pub fn position(&self) -> Option<PositionSnapshot> {
        match self {
            Self::Placed(event) => Some(event.position),
            Self::Moved(result) => Some(result.position),
            Self::Rotated(event) => Some(event.position),
            Self::Reported { position } => Some(*position),
            Self::Rejected { .. } => None,
        }
    }

    /// Text block a front end shows for this outcome.
    ///
    /// ```rust
    /// use toy_robot::Simulation;
    ///
    /// let mut sim = Simulation::default();
    /// sim.run_line("PLACE 1,6,NORTH");
    ///
    /// assert_eq!(
    ///     sim.run_line("MOVE").render(),
    ///     "Attempted to move forward - collided with North wall\nMoved forward\nX:1 Y:6 Facing:North",
    /// );
    /// ```
    pub fn render(&self) -> String {
        match self {
            Self::Placed(event) => report::format(&event.position, Some(event.message())),
            Self::Moved(result) => {
                let body = report::format(&result.position, Some(result.message()));
                match result.warning() {
                    Some(warning) => format!("{warning}\n{body}"),
                    None => body,
                }
            }
            Self::Rotated(event) => report::format(&event.position, Some(event.message().as_str())),
            Self::Reported { position } => report::format(position, None),
            Self::Rejected { errors } => errors.to_string(),
        }
    }
}
