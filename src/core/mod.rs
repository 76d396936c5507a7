//! Core robot and grid types.
//!
//! This module contains the pure state of the simulation:
//! - `Grid` bounds and the two row conventions
//! - `Direction` and `Rotation` arithmetic
//! - `Robot` transitions
//! - `PoseHistory` of applied transitions
//!
//! Nothing here performs I/O.

mod direction;
mod grid;
mod history;
mod robot;

pub use direction::{Direction, Rotation};
pub use grid::{Grid, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use history::{Action, PoseHistory, PoseTransition, DEFAULT_HISTORY_LIMIT};
pub use robot::{Pose, Robot, Step, DEFAULT_DIRECTION, DEFAULT_X, DEFAULT_Y};
