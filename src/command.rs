//! Text command parsing.
//!
//! A line is a keyword followed by an optional comma-separated argument
//! list: `PLACE 3,4,NORTH`, `ROTATE LEFT`, `MOVE`, `REPORT`. Keywords are
//! matched exactly (upper case); arguments are not case sensitive.

use crate::core::{Direction, Rotation};
use crate::validation::{self, Axis, ValidationError, ValidationErrors};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Example commands a front end can offer for pre-filling its input.
pub const EXAMPLES: [&str; 5] = [
    "PLACE x,y,dir",
    "MOVE",
    "ROTATE LEFT",
    "ROTATE RIGHT",
    "REPORT",
];

/// One parsed instruction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Move to `(x, y)`, optionally turning to `dir`.
    Place {
        x: i64,
        y: i64,
        dir: Option<Direction>,
    },
    Move,
    Rotate(Rotation),
    Report,
    /// The line could not be understood.
    Invalid(ValidationErrors),
}

impl Command {
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Place { x, y, dir: Some(dir) } => write!(f, "PLACE {x},{y},{dir}"),
            Self::Place { x, y, dir: None } => write!(f, "PLACE {x},{y}"),
            Self::Move => f.write_str("MOVE"),
            Self::Rotate(rotation) => write!(f, "ROTATE {rotation}"),
            Self::Report => f.write_str("REPORT"),
            Self::Invalid(errors) => write!(f, "INVALID ({errors})"),
        }
    }
}

/// Parse one line of input.
///
/// Never fails: unusable input becomes [`Command::Invalid`] carrying every
/// reason the line was rejected.
///
/// # Example
///
/// ```rust
/// use toy_robot::command::{parse, Command};
/// use toy_robot::core::Direction;
///
/// assert_eq!(
///     parse("PLACE 3,4,NORTH"),
///     Command::Place { x: 3, y: 4, dir: Some(Direction::North) },
/// );
/// assert!(parse("FOO").is_invalid());
/// ```
pub fn parse(line: &str) -> Command {
    let mut words = line.split_whitespace();
    let keyword = words.next().unwrap_or_default();
    let rest = words.collect::<Vec<_>>().join(" ");
    let args: Vec<&str> = rest.split(',').map(str::trim).collect();

    match keyword {
        "PLACE" => parse_place(&args),
        "ROTATE" => match validation::finish(validation::rotation(args.first().copied())) {
            Ok(rotation) => Command::Rotate(rotation),
            Err(errors) => Command::Invalid(errors),
        },
        "MOVE" => Command::Move,
        "REPORT" => Command::Report,
        _ => Command::Invalid(ValidationErrors::from(ValidationError::UnknownAction {
            keyword: keyword.to_string(),
        })),
    }
}

fn parse_place(args: &[&str]) -> Command {
    let checked = validation::zip(
        validation::zip(
            validation::coordinate(Axis::X, args.first().copied()),
            validation::coordinate(Axis::Y, args.get(1).copied()),
        ),
        validation::direction(args.get(2).copied()),
    );

    match validation::finish(checked) {
        Ok(((x, y), dir)) => Command::Place { x, y, dir },
        Err(errors) => Command::Invalid(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(command: Command) -> Vec<String> {
        match command {
            Command::Invalid(errors) => errors.messages(),
            other => panic!("Expected invalid command, got {other:?}"),
        }
    }

    #[test]
    fn parses_place_with_direction() {
        assert_eq!(
            parse("PLACE 3,4,NORTH"),
            Command::Place {
                x: 3,
                y: 4,
                dir: Some(Direction::North)
            }
        );
    }

    #[test]
    fn place_tolerates_spaces_around_commas() {
        assert_eq!(
            parse("  PLACE 1 , 2 , south "),
            Command::Place {
                x: 1,
                y: 2,
                dir: Some(Direction::South)
            }
        );
    }

    #[test]
    fn place_without_direction_keeps_it_open() {
        assert_eq!(
            parse("PLACE 1,2"),
            Command::Place {
                x: 1,
                y: 2,
                dir: None
            }
        );
    }

    #[test]
    fn place_collects_every_argument_error() {
        assert_eq!(
            messages(parse("PLACE 0,abc,UP")),
            vec![
                "X-coordinate must be greater than 0",
                "Y-coordinate must be a number",
                "Direction must be in allowed list",
            ]
        );
    }

    #[test]
    fn bare_place_reports_both_coordinates() {
        assert_eq!(
            messages(parse("PLACE")),
            vec![
                "X-coordinate must be a number",
                "Y-coordinate must be a number"
            ]
        );
    }

    #[test]
    fn parses_rotations_case_insensitively() {
        assert_eq!(parse("ROTATE left"), Command::Rotate(Rotation::Left));
        assert_eq!(parse("ROTATE RIGHT"), Command::Rotate(Rotation::Right));
    }

    #[test]
    fn rotate_rejects_unknown_word() {
        assert_eq!(
            messages(parse("ROTATE UP")),
            vec!["Rotation must be LEFT or RIGHT"]
        );
    }

    #[test]
    fn move_and_report_ignore_arguments() {
        assert_eq!(parse("MOVE"), Command::Move);
        assert_eq!(parse("REPORT now"), Command::Report);
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert!(parse("move").is_invalid());
        assert_eq!(messages(parse("FOO")), vec!["Action not valid, try again."]);
        assert!(parse("").is_invalid());
    }

    #[test]
    fn display_writes_canonical_text() {
        assert_eq!(parse("PLACE 1 ,2, east").to_string(), "PLACE 1,2,EAST");
        assert_eq!(parse("ROTATE left").to_string(), "ROTATE LEFT");
    }

    #[test]
    fn every_example_has_a_known_keyword() {
        for example in EXAMPLES {
            let command = parse(example);
            if let Command::Invalid(errors) = &command {
                assert!(errors
                    .iter()
                    .all(|e| !matches!(e, ValidationError::UnknownAction { .. })));
            }
        }
    }
}
