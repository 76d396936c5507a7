//! Toy Robot: a robot on a bounded grid as a pure, validated state machine
//!
//! A robot occupies one cell of a rectangular grid, faces one of the four
//! compass directions and accepts a small vocabulary of commands. Every
//! operation either applies fully or is rejected with every reason at once;
//! moving into a wall is not an error but a clamped move with a warning.
//!
//! # Core Concepts
//!
//! - **Grid**: the bounds, with `y` counted from the bottom row
//! - **Robot**: position and facing, changed only by place, move and rotate
//! - **Command**: a parsed line of text, dispatched by [`Simulation::execute`]
//! - **Validation**: Stillwater's `Validation` accumulates all input errors
//!
//! # Example
//!
//! ```rust
//! use toy_robot::Simulation;
//!
//! let mut sim = Simulation::default();
//!
//! sim.run_line("PLACE 1,1,SOUTH");
//! let moved = sim.run_line("MOVE");
//! assert!(moved.render().contains("collided with South wall"));
//!
//! sim.run_line("ROTATE LEFT");
//! sim.run_line("MOVE");
//! assert_eq!(sim.report().to_string(), "X:2 Y:1 Facing:East");
//! ```

pub mod builder;
pub mod command;
pub mod core;
pub mod report;
pub mod simulation;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, SimulationBuilder};
pub use command::Command;
pub use core::{Direction, Grid, Pose, Rotation};
pub use report::PositionSnapshot;
pub use simulation::{MoveResult, Outcome, PlacedEvent, RotatedEvent, Simulation};
pub use validation::{ValidationError, ValidationErrors};
