//! Pose transition history.
//!
//! Every applied place, move and rotate is recorded with the pose before and
//! after it. Rejected operations never reach the history.

use super::direction::Rotation;
use super::robot::Pose;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The operation that produced a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Place,
    Move,
    Rotate(Rotation),
}

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use toy_robot::core::{Action, Direction, Pose, PoseTransition};
/// use chrono::Utc;
///
/// let transition = PoseTransition {
///     action: Action::Move,
///     from: Pose::new(1, 1, Direction::North),
///     to: Pose::new(1, 2, Direction::North),
///     timestamp: Utc::now(),
///     collided: false,
/// };
/// assert!(!transition.collided);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoseTransition {
    /// What was done
    pub action: Action,
    /// Pose before the transition
    pub from: Pose,
    /// Pose after the transition
    pub to: Pose,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
    /// Whether a move was stopped by a wall
    pub collided: bool,
}

/// Default number of transitions kept before the oldest are dropped.
pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

fn default_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

/// Ordered history of the most recent applied transitions.
///
/// Holds at most `limit` entries; recording past the limit drops the oldest.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PoseHistory {
    transitions: Vec<PoseTransition>,
    #[serde(default = "default_limit")]
    limit: usize,
}

impl Default for PoseHistory {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl PoseHistory {
    /// Create a new empty history with the default limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty history keeping at most `limit` transitions.
    /// A limit of 0 records nothing.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: Vec::new(),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Append a transition, dropping the oldest ones beyond the limit.
    pub fn record(&mut self, transition: PoseTransition) {
        self.transitions.push(transition);
        if self.transitions.len() > self.limit {
            let excess = self.transitions.len() - self.limit;
            self.transitions.drain(..excess);
        }
    }

    /// Poses visited, in order: the first `from`, then every `to`.
    ///
    /// ```rust
    /// use toy_robot::core::{Action, Direction, Pose, PoseHistory, PoseTransition};
    /// use chrono::Utc;
    ///
    /// let a = Pose::new(1, 1, Direction::North);
    /// let b = Pose::new(1, 2, Direction::North);
    ///
    /// let mut history = PoseHistory::new();
    /// history.record(PoseTransition {
    ///     action: Action::Move,
    ///     from: a,
    ///     to: b,
    ///     timestamp: Utc::now(),
    ///     collided: false,
    /// });
    ///
    /// assert_eq!(history.path(), vec![&a, &b]);
    /// ```
    pub fn path(&self) -> Vec<&Pose> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Moves that were stopped by a wall.
    pub fn collisions(&self) -> impl Iterator<Item = &PoseTransition> {
        self.transitions.iter().filter(|t| t.collided)
    }

    pub fn transitions(&self) -> &[PoseTransition] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
