//! Builder API for configuring a simulation.
//!
//! # Example
//!
//! ```
//! use toy_robot::builder::SimulationBuilder;
//! use toy_robot::core::Direction;
//!
//! let sim = SimulationBuilder::new()
//!     .grid(5, 5)
//!     .start(1, 1, Direction::East)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(sim.report().to_string(), "X:1 Y:1 Facing:East");
//! ```

pub mod error;
pub mod simulation;

pub use error::BuildError;
pub use simulation::SimulationBuilder;
