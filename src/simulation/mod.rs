//! The simulation: one grid, one robot, and the operations that drive them.
//!
//! `Simulation` is the only entry point a front end needs. Raw strings go
//! in, event values come out; validation failures are returned as
//! [`ValidationErrors`] and leave the state untouched.

mod events;

pub use events::{MoveResult, Outcome, PlacedEvent, RotatedEvent};

use crate::command::{self, Command};
use crate::core::{Action, Direction, Grid, Pose, PoseHistory, PoseTransition, Robot, Rotation};
use crate::report::PositionSnapshot;
use crate::validation::{self, Axis, ValidationErrors};
use chrono::Utc;
use log::{debug, info, warn};

/// A robot on a grid.
#[derive(Clone, Debug)]
pub struct Simulation {
    grid: Grid,
    robot: Robot,
    history: PoseHistory,
}

impl Default for Simulation {
    fn default() -> Self {
        let grid = Grid::default();
        Self::new(grid, Robot::with_default_pose(&grid), PoseHistory::new())
    }
}

impl Simulation {
    pub(crate) fn new(grid: Grid, robot: Robot, history: PoseHistory) -> Self {
        Self {
            grid,
            robot,
            history,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The most recent applied transitions, up to the configured limit.
    pub fn history(&self) -> &PoseHistory {
        &self.history
    }

    /// Column and internal top-down row of the robot, for drawing.
    pub fn cell(&self) -> (i64, i64) {
        self.robot.cell()
    }

    /// Current position; never fails and never changes state.
    pub fn report(&self) -> PositionSnapshot {
        self.robot.pose(&self.grid)
    }

    /// Place the robot from raw input.
    ///
    /// Every coordinate and direction rule is checked before anything is
    /// reported, so all failures come back together.
    ///
    /// # Errors
    ///
    /// Returns every failure among: non-numeric coordinate, zero coordinate,
    /// coordinate off the grid, unknown direction.
    pub fn place(
        &mut self,
        x: &str,
        y: &str,
        dir: Option<&str>,
    ) -> Result<PlacedEvent, ValidationErrors> {
        let checked = validation::zip(
            validation::zip(
                validation::coordinate_within(Axis::X, Some(x), self.grid.width()),
                validation::coordinate_within(Axis::Y, Some(y), self.grid.height()),
            ),
            validation::direction(dir),
        );

        let ((x, y), dir) = validation::finish(checked).inspect_err(|errors| {
            info!("Rejected placement: {}", errors.messages().join("; "));
        })?;
        self.place_at(x, y, dir)
    }

    /// Place the robot at typed coordinates; `None` keeps the current facing.
    ///
    /// # Errors
    ///
    /// Returns a failure for each coordinate that is zero or off the grid.
    pub fn place_at(
        &mut self,
        x: i64,
        y: i64,
        dir: Option<Direction>,
    ) -> Result<PlacedEvent, ValidationErrors> {
        let from = self.report();
        let position = self.robot.place(&self.grid, x, y, dir)?;

        debug!("Placed robot at {position}");
        self.record(Action::Place, from, position, false);
        Ok(PlacedEvent { position })
    }

    /// Move one cell forward. Never fails; a wall clamps the move and is
    /// reported in the result.
    pub fn move_forward(&mut self) -> MoveResult {
        let from = self.report();
        let step = self.robot.advance(&self.grid);

        match step.wall {
            Some(wall) => warn!("Robot at {from} collided with {} wall", wall.capitalised()),
            None => debug!("Moved robot to {}", step.pose),
        }
        self.record(Action::Move, from, step.pose, step.wall.is_some());

        MoveResult {
            position: step.pose,
            collided: step.wall.is_some(),
            wall: step.wall,
        }
    }

    /// Rotate from raw input (`LEFT` or `RIGHT`, any case).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidRotation`] for any other word; the
    /// facing is left unchanged.
    ///
    /// [`ValidationError::InvalidRotation`]: crate::validation::ValidationError::InvalidRotation
    pub fn rotate(&mut self, rotation: &str) -> Result<RotatedEvent, ValidationErrors> {
        let rotation = validation::finish(validation::rotation(Some(rotation)))?;
        Ok(self.rotate_by(rotation))
    }

    /// Rotate by an already-parsed rotation.
    pub fn rotate_by(&mut self, rotation: Rotation) -> RotatedEvent {
        let from = self.report();
        let facing = self.robot.rotate(rotation);

        debug!("Rotated robot {} to face {facing}", rotation.lowercase());
        let position = self.report();
        self.record(Action::Rotate(rotation), from, position, false);
        RotatedEvent { rotation, position }
    }

    /// Replace the grid dimensions from raw input.
    ///
    /// The robot keeps its bottom-up position, clamped into the new bounds.
    ///
    /// # Errors
    ///
    /// Returns a failure for each dimension that is not a positive integer;
    /// the current grid is kept.
    pub fn reconfigure_grid(&mut self, width: &str, height: &str) -> Result<(), ValidationErrors> {
        let old = self.grid;
        self.grid.reconfigure(width, height)?;
        self.robot.refit(&old, &self.grid);

        info!(
            "Grid resized from {}x{} to {}x{}",
            old.width(),
            old.height(),
            self.grid.width(),
            self.grid.height()
        );
        Ok(())
    }

    /// Parse a line without executing it.
    pub fn parse_command_line(&self, text: &str) -> Command {
        command::parse(text)
    }

    /// Dispatch a parsed command.
    pub fn execute(&mut self, command: Command) -> Outcome {
        debug!("Executing {command}");
        match command {
            Command::Place { x, y, dir } => match self.place_at(x, y, dir) {
                Ok(event) => Outcome::Placed(event),
                Err(errors) => Outcome::Rejected { errors },
            },
            Command::Move => Outcome::Moved(self.move_forward()),
            Command::Rotate(rotation) => Outcome::Rotated(self.rotate_by(rotation)),
            Command::Report => Outcome::Reported {
                position: self.report(),
            },
            Command::Invalid(errors) => {
                info!("Rejected command: {}", errors.messages().join("; "));
                Outcome::Rejected { errors }
            }
        }
    }

    /// Parse and dispatch one line of input.
    pub fn run_line(&mut self, text: &str) -> Outcome {
        let command = self.parse_command_line(text);
        self.execute(command)
    }

    fn record(&mut self, action: Action, from: Pose, to: Pose, collided: bool) {
        self.history.record(PoseTransition {
            action,
            from,
            to,
            timestamp: Utc::now(),
            collided,
        });
    }
}
