//! The robot and its transitions.
//!
//! A robot is always placed. It stores its row in the grid's internal
//! top-down convention and converts to the bottom-up `y` only when a
//! [`Pose`] is taken. Every transition is atomic: it either applies fully or
//! leaves the robot untouched.

use super::direction::{Direction, Rotation};
use super::grid::Grid;
use crate::validation::{self, Axis, ValidationErrors};
use serde::{Deserialize, Serialize};

/// Default starting column.
pub const DEFAULT_X: i64 = 2;

/// Default starting `y`, counted from the bottom row.
pub const DEFAULT_Y: i64 = 3;

/// Default starting direction.
pub const DEFAULT_DIRECTION: Direction = Direction::North;

/// The robot's position and facing as the user sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pose {
    /// Column, `1..=width`.
    pub x: i64,
    /// Row counted from the bottom, `1..=height`.
    pub y: i64,
    /// Facing.
    pub dir: Direction,
}

impl Pose {
    pub fn new(x: i64, y: i64, dir: Direction) -> Self {
        Self { x, y, dir }
    }
}

/// Result of moving one cell forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Pose after the move (clamped to the grid).
    pub pose: Pose,
    /// The wall that stopped the robot, if it tried to leave the grid.
    pub wall: Option<Direction>,
}

/// Robot state. Only mutated through [`place`](Robot::place),
/// [`advance`](Robot::advance), [`rotate`](Robot::rotate) and
/// [`refit`](Robot::refit).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    x: i64,
    row: i64,
    dir: Direction,
}

impl Robot {
    /// Place a robot on `grid` at a bottom-up pose.
    ///
    /// Returns `None` if the pose is off the grid.
    pub fn new(grid: &Grid, pose: Pose) -> Option<Self> {
        grid.contains(pose.x, pose.y).then(|| Self {
            x: pose.x,
            row: grid.row_of(pose.y),
            dir: pose.dir,
        })
    }

    /// The robot at the default start pose on `grid`, clamped if the grid is
    /// smaller than the default.
    pub fn with_default_pose(grid: &Grid) -> Self {
        let y = grid.clamp_y(DEFAULT_Y);
        Self {
            x: grid.clamp_x(DEFAULT_X),
            row: grid.row_of(y),
            dir: DEFAULT_DIRECTION,
        }
    }

    pub fn direction(&self) -> Direction {
        self.dir
    }

    /// Column and internal top-down row, for drawing.
    pub fn cell(&self) -> (i64, i64) {
        (self.x, self.row)
    }

    /// Current pose with `y` measured from the bottom row.
    pub fn pose(&self, grid: &Grid) -> Pose {
        Pose::new(self.x, grid.y_of(self.row), self.dir)
    }

    /// Move to `(x, y)`, facing `dir` or the current direction if omitted.
    ///
    /// # Errors
    ///
    /// Returns every coordinate that lies outside `grid`; the robot is left
    /// unchanged.
    pub fn place(
        &mut self,
        grid: &Grid,
        x: i64,
        y: i64,
        dir: Option<Direction>,
    ) -> Result<Pose, ValidationErrors> {
        let (x, y) = validation::finish(validation::zip(
            validation::within(Axis::X, x, grid.width()),
            validation::within(Axis::Y, y, grid.height()),
        ))?;

        self.x = x;
        self.row = grid.row_of(y);
        self.dir = dir.unwrap_or(self.dir);
        Ok(self.pose(grid))
    }

    /// Move one cell in the facing direction, stopping at the edge.
    ///
    /// A move that would leave the grid is clamped to the boundary and
    /// reports the wall it hit.
    pub fn advance(&mut self, grid: &Grid) -> Step {
        let candidate = match self.dir {
            Direction::North => self.row.checked_sub(1).map(|row| (self.x, row)),
            Direction::South => self.row.checked_add(1).map(|row| (self.x, row)),
            Direction::East => self.x.checked_add(1).map(|x| (x, self.row)),
            Direction::West => self.x.checked_sub(1).map(|x| (x, self.row)),
        };

        // A step past i64 is past any wall too.
        let wall = match candidate {
            Some((x, row)) if grid.contains(x, row) => {
                (self.x, self.row) = (x, row);
                None
            }
            _ => Some(self.dir),
        };

        Step {
            pose: self.pose(grid),
            wall,
        }
    }

    /// Turn a quarter in place.
    pub fn rotate(&mut self, rotation: Rotation) -> Direction {
        self.dir = self.dir.rotate(rotation.delta());
        self.dir
    }

    /// Keep the bottom-up position across a grid resize, clamped into the new
    /// bounds.
    pub fn refit(&mut self, old: &Grid, new: &Grid) {
        let y = new.clamp_y(old.y_of(self.row));
        self.x = new.clamp_x(self.x);
        self.row = new.row_of(y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::default()
    }

    fn robot_at(x: i64, y: i64, dir: Direction) -> Robot {
        Robot::new(&grid(), Pose::new(x, y, dir)).unwrap()
    }

    #[test]
    fn default_pose_is_two_three_north() {
        let robot = Robot::with_default_pose(&grid());
        assert_eq!(robot.pose(&grid()), Pose::new(2, 3, Direction::North));
        assert_eq!(robot.cell(), (2, 4));
    }

    #[test]
    fn default_pose_is_clamped_onto_small_grid() {
        let small = Grid::new(1, 1).unwrap();
        let robot = Robot::with_default_pose(&small);
        assert_eq!(robot.pose(&small), Pose::new(1, 1, Direction::North));
    }

    #[test]
    fn place_maps_bottom_up_y_to_internal_row() {
        let mut robot = Robot::with_default_pose(&grid());
        let pose = robot.place(&grid(), 1, 1, Some(Direction::South)).unwrap();

        assert_eq!(pose, Pose::new(1, 1, Direction::South));
        assert_eq!(robot.cell(), (1, 6));
    }

    #[test]
    fn place_without_direction_keeps_facing() {
        let mut robot = robot_at(1, 1, Direction::West);
        let pose = robot.place(&grid(), 3, 3, None).unwrap();
        assert_eq!(pose.dir, Direction::West);
    }

    #[test]
    fn place_off_grid_reports_both_axes_and_changes_nothing() {
        let mut robot = robot_at(2, 2, Direction::East);
        let before = robot.clone();

        let errors = robot.place(&grid(), 5, 7, Some(Direction::North)).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(robot, before);
    }

    #[test]
    fn advance_north_increases_bottom_up_y() {
        let mut robot = robot_at(2, 3, Direction::North);
        let step = robot.advance(&grid());
        assert_eq!(step.pose, Pose::new(2, 4, Direction::North));
        assert_eq!(step.wall, None);
    }

    #[test]
    fn advance_into_each_wall_clamps_and_names_it() {
        let cases = [
            (Pose::new(2, 6, Direction::North), Direction::North),
            (Pose::new(2, 1, Direction::South), Direction::South),
            (Pose::new(4, 3, Direction::East), Direction::East),
            (Pose::new(1, 3, Direction::West), Direction::West),
        ];

        for (start, wall) in cases {
            let mut robot = Robot::new(&grid(), start).unwrap();
            let step = robot.advance(&grid());
            assert_eq!(step.pose, start);
            assert_eq!(step.wall, Some(wall));
        }
    }

    #[test]
    fn advance_stops_at_edges_of_largest_grid() {
        let huge = Grid::new(i64::MAX, i64::MAX).unwrap();
        let cases = [
            (Pose::new(i64::MAX, 1, Direction::East), Direction::East),
            (Pose::new(1, 1, Direction::South), Direction::South),
            (Pose::new(1, i64::MAX, Direction::North), Direction::North),
            (Pose::new(1, 1, Direction::West), Direction::West),
        ];

        for (start, wall) in cases {
            let mut robot = Robot::new(&huge, start).unwrap();
            let step = robot.advance(&huge);
            assert_eq!(step.pose, start);
            assert_eq!(step.wall, Some(wall));
        }
    }

    #[test]
    fn rotate_right_four_times_is_identity() {
        let mut robot = robot_at(1, 1, Direction::South);
        for _ in 0..4 {
            robot.rotate(Rotation::Right);
        }
        assert_eq!(robot.direction(), Direction::South);
    }

    #[test]
    fn refit_keeps_bottom_up_position() {
        let mut robot = robot_at(2, 3, Direction::North);
        let taller = Grid::new(4, 10).unwrap();

        robot.refit(&grid(), &taller);

        assert_eq!(robot.pose(&taller), Pose::new(2, 3, Direction::North));
    }

    #[test]
    fn refit_clamps_into_smaller_grid() {
        let mut robot = robot_at(4, 6, Direction::East);
        let smaller = Grid::new(2, 2).unwrap();

        robot.refit(&grid(), &smaller);

        assert_eq!(robot.pose(&smaller), Pose::new(2, 2, Direction::East));
    }
}
