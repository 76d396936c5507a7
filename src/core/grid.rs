//! The bounded rectangular board.
//!
//! Columns run `1..=width` left to right. Rows have two conventions:
//! the user-facing `y` counts up from the bottom row, while the internal
//! row counts down from the top (the order a table is drawn in).

use crate::validation::{self, ValidationErrors};
use serde::{Deserialize, Serialize};

/// Default number of columns.
pub const DEFAULT_WIDTH: i64 = 4;

/// Default number of rows.
pub const DEFAULT_HEIGHT: i64 = 6;

/// Grid dimensions. Both are always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: i64,
    height: i64,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Grid {
    /// Create a grid from already-validated dimensions.
    ///
    /// Returns `None` if either dimension is below 1.
    pub fn new(width: i64, height: i64) -> Option<Self> {
        (width >= 1 && height >= 1).then_some(Self { width, height })
    }

    /// Create a grid from raw user input, accumulating every failure.
    ///
    /// # Errors
    ///
    /// Returns one [`ValidationError::InvalidDimension`] per dimension that
    /// is empty, non-numeric, zero or negative.
    ///
    /// [`ValidationError::InvalidDimension`]: crate::validation::ValidationError::InvalidDimension
    pub fn parse(width: &str, height: &str) -> Result<Self, ValidationErrors> {
        let (width, height) = validation::finish(validation::dimensions(width, height))?;
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    /// True iff `(x, y)` lies on the grid (1-indexed, either row convention).
    pub fn contains(&self, x: i64, y: i64) -> bool {
        (1..=self.width).contains(&x) && (1..=self.height).contains(&y)
    }

    /// Convert a bottom-up `y` into the internal top-down row.
    pub fn row_of(&self, y: i64) -> i64 {
        self.height - y + 1
    }

    /// Convert an internal top-down row back into a bottom-up `y`.
    pub fn y_of(&self, row: i64) -> i64 {
        self.height - row + 1
    }

    /// Clamp a column into `1..=width`.
    pub fn clamp_x(&self, x: i64) -> i64 {
        x.clamp(1, self.width)
    }

    /// Clamp a row (either convention) into `1..=height`.
    pub fn clamp_y(&self, y: i64) -> i64 {
        y.clamp(1, self.height)
    }

    /// Replace the dimensions with new raw values.
    ///
    /// On failure the current dimensions are kept.
    ///
    /// # Errors
    ///
    /// See [`Grid::parse`].
    pub fn reconfigure(&mut self, width: &str, height: &str) -> Result<(), ValidationErrors> {
        *self = Self::parse(width, height)?;
        Ok(())
    }
}
