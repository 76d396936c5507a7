//! Build errors for the simulation builder.

use thiserror::Error;

/// Errors that can occur when building a simulation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Grid must be at least 1x1, got {width}x{height}")]
    InvalidGrid { width: i64, height: i64 },

    #[error("Start position ({x}, {y}) is outside the {width}x{height} grid")]
    StartOffGrid {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    },
}
