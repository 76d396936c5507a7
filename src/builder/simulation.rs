//! Builder for constructing simulations.

use crate::builder::error::BuildError;
use crate::core::{
    Direction, Grid, Pose, PoseHistory, Robot, DEFAULT_HEIGHT, DEFAULT_HISTORY_LIMIT, DEFAULT_WIDTH,
};
use crate::simulation::Simulation;

/// Builder for a [`Simulation`] with a fluent API.
///
/// Without any calls it builds the default 4x6 grid with the robot at
/// (2, 3) facing north.
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    width: i64,
    height: i64,
    start: Option<Pose>,
    history_limit: usize,
}

impl SimulationBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            start: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Set the grid dimensions.
    pub fn grid(mut self, width: i64, height: i64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the starting pose (bottom-up `y`).
    ///
    /// If never called, the default start pose is used, clamped onto the
    /// grid.
    pub fn start(mut self, x: i64, y: i64, dir: Direction) -> Self {
        self.start = Some(Pose::new(x, y, dir));
        self
    }

    /// Set how many transitions the history keeps.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Build the simulation.
    /// Returns an error if the grid is empty or the start pose is off it.
    pub fn build(self) -> Result<Simulation, BuildError> {
        let grid = Grid::new(self.width, self.height).ok_or(BuildError::InvalidGrid {
            width: self.width,
            height: self.height,
        })?;

        let robot = match self.start {
            Some(pose) => Robot::new(&grid, pose).ok_or(BuildError::StartOffGrid {
                x: pose.x,
                y: pose.y,
                width: grid.width(),
                height: grid.height(),
            })?,
            None => Robot::with_default_pose(&grid),
        };

        Ok(Simulation::new(
            grid,
            robot,
            PoseHistory::with_limit(self.history_limit),
        ))
    }
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
