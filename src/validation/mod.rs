//! Validation of raw user input.
//!
//! All input reaching the simulation is an opaque string from a text field or
//! a grid-cell click. This module owns the conversion into typed values, and
//! it uses Stillwater's `Validation` type so that an operation reports every
//! broken rule at once instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use toy_robot::validation::{self, Axis};
//!
//! let checked = validation::zip(
//!     validation::coordinate(Axis::X, Some("0")),
//!     validation::direction(Some("UP")),
//! );
//! let errors = validation::finish(checked).unwrap_err();
//!
//! assert_eq!(
//!     errors.messages(),
//!     vec!["X-coordinate must be greater than 0", "Direction must be in allowed list"],
//! );
//! ```

pub mod errors;
pub mod rules;

pub use errors::{Axis, Dimension, ValidationError, ValidationErrors};
pub use rules::{
    coordinate, coordinate_within, dimension, dimensions, direction, finish, rotation, within,
    zip, Checked,
};
