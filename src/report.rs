//! Human-readable position reports.

use crate::core::{Direction, Pose};
use std::fmt;

/// Read-only view of the robot returned by a report.
pub type PositionSnapshot = Pose;

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X:{} Y:{} Facing:{}",
            self.x,
            self.y,
            self.dir.capitalised()
        )
    }
}

/// Format a position, preceded by the action that produced it.
///
/// ```rust
/// use toy_robot::core::{Direction, Pose};
/// use toy_robot::report;
///
/// let pose = Pose::new(1, 1, Direction::South);
/// assert_eq!(report::format(&pose, None), "X:1 Y:1 Facing:South");
/// assert_eq!(report::format(&pose, Some("Placed")), "Placed\nX:1 Y:1 Facing:South");
/// ```
pub fn format(snapshot: &PositionSnapshot, preamble: Option<&str>) -> String {
    match preamble {
        Some(action) => format!("{action}\n{snapshot}"),
        None => snapshot.to_string(),
    }
}

/// Warning shown when a move is stopped by `wall`.
pub fn collision_warning(wall: Direction) -> String {
    format!(
        "Attempted to move forward - collided with {} wall",
        wall.capitalised()
    )
}
